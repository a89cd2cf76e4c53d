//! Fulfillment error types.

use common::{OrderId, ProductId};
use domain::FulfillmentFailure;
use thiserror::Error;

/// Errors that can occur while fulfilling an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FulfillmentError {
    /// `execute` was called before an order was set.
    #[error("No order set for fulfillment")]
    NoOrder,

    /// The order has not been paid yet.
    #[error("Order not paid: {order_id}")]
    OrderNotPaid { order_id: OrderId },

    /// A product's fulfillment action failed.
    #[error("Fulfillment of item {position} ({product_name}, {product_id}) failed: {source}")]
    FulfillmentFailed {
        position: usize,
        product_id: ProductId,
        product_name: String,
        #[source]
        source: FulfillmentFailure,
    },
}

/// Convenience type alias for fulfillment results.
pub type Result<T> = std::result::Result<T, FulfillmentError>;
