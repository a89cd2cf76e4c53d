//! Invoices.

use common::{Address, OrderId};
use serde::Serialize;

use crate::order::Order;

/// Billing and shipping snapshot of a paid order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    order_id: OrderId,
    billing_address: Address,
    shipping_address: Address,
}

impl Invoice {
    /// Snapshots the order's address as both billing and shipping address.
    pub(crate) fn new(order: &Order) -> Self {
        let address = order.address();
        Self {
            order_id: order.id(),
            billing_address: address.clone(),
            shipping_address: address.clone(),
        }
    }

    /// Returns the id of the invoiced order.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }
}
