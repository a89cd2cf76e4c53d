//! Domain layer for the order lifecycle.
//!
//! This crate provides:
//! - Product kinds and the product factory
//! - Order aggregate with its open/closed status
//! - Payments, payment methods, and invoices

pub mod error;
pub mod money;
pub mod order;
pub mod payment;
pub mod product;

pub use error::{DomainError, ErrorKind};
pub use money::Money;
pub use order::{Order, OrderError, OrderItem, OrderStatus};
pub use payment::{AuthorizationNumber, CreditCard, Invoice, Payment, PaymentMethod};
pub use product::{
    FulfillmentFailure, Product, ProductDetails, ProductError, ProductKind, create_product,
    create_product_from_tag,
};
