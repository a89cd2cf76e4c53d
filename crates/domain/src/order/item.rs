//! Order line items.

use serde::Serialize;

use crate::money::Money;
use crate::product::Product;

/// A product, the quantity ordered, and the resulting line total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    product: Product,
    quantity: u32,
    total: Money,
}

impl OrderItem {
    /// Creates a new order item.
    ///
    /// Returns `None` if the line total (unit price * quantity) cannot be
    /// represented.
    pub fn try_new(product: Product, quantity: u32) -> Option<Self> {
        let total = product.unit_price()?.checked_multiply(quantity)?;
        Some(Self {
            product,
            quantity,
            total,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the line total (unit price * quantity).
    pub fn total(&self) -> Money {
        self.total
    }
}
