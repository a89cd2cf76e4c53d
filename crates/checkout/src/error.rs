//! Checkout error types.

use domain::{DomainError, OrderError, ProductError};
use fulfillment::FulfillmentError;
use thiserror::Error;

/// Errors that can stop a checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Building or paying the order failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Fulfilling the paid order failed.
    #[error("Fulfillment error: {0}")]
    Fulfillment(#[from] FulfillmentError),
}

impl From<ProductError> for CheckoutError {
    fn from(e: ProductError) -> Self {
        CheckoutError::Domain(e.into())
    }
}

impl From<OrderError> for CheckoutError {
    fn from(e: OrderError) -> Self {
        CheckoutError::Domain(e.into())
    }
}
