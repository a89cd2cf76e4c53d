//! Product catalog: kinds, products, and the product factory.

mod catalog;
mod factory;
mod kind;

pub use catalog::{FulfillmentFailure, Product, ProductDetails};
pub use factory::{create_product, create_product_from_tag};
pub use kind::ProductKind;

use thiserror::Error;

/// Errors that can occur while creating products.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    /// The product kind tag is not one of the known kinds.
    #[error("Unsupported product kind: {kind}")]
    UnsupportedKind { kind: String },

    /// Price is negative or not finite.
    #[error("Invalid price: {price} (must be finite and non-negative)")]
    InvalidPrice { price: f64 },
}
