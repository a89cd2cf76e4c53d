//! Order aggregate and related types.

mod aggregate;
mod item;
mod state;

pub use aggregate::Order;
pub use item::OrderItem;
pub use state::OrderStatus;

use common::{OrderId, ProductId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// The line total or the order total cannot be represented.
    #[error("Amount for {quantity} x product {product_id} is out of range")]
    AmountOutOfRange {
        product_id: ProductId,
        quantity: u32,
    },

    /// The same product was added twice.
    #[error(
        "Product {product_name} ({product_id}) has already been added; change the quantity instead"
    )]
    DuplicateProduct {
        product_id: ProductId,
        product_name: String,
    },

    /// The order already has a payment and is closed.
    #[error("Order {order_id} has already been paid")]
    AlreadyPaid { order_id: OrderId },

    /// Order has no items.
    #[error("Empty order {order_id} cannot be paid")]
    EmptyOrder { order_id: OrderId },
}
