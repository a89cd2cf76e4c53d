//! Order aggregate implementation.

use chrono::{DateTime, Utc};
use common::{Address, Customer, OrderId, ProductId};
use serde::Serialize;

use crate::money::Money;
use crate::payment::{Payment, PaymentMethod};
use crate::product::Product;

use super::{OrderError, OrderItem, OrderStatus};

/// Payment and close time, always set together.
#[derive(Debug, Clone, Serialize)]
struct Settlement {
    payment: Payment,
    closed_at: DateTime<Utc>,
}

/// Order aggregate root.
///
/// Holds the items a customer is buying. An order is open until [`Order::pay`]
/// succeeds, after which it is closed for good.
///
/// Not synchronized: share it behind a lock if several callers may add
/// products or pay concurrently.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique order identifier.
    id: OrderId,

    /// Customer who placed the order.
    customer: Customer,

    /// Address used for billing and shipping.
    address: Address,

    /// When the order was opened.
    created_at: DateTime<Utc>,

    /// Items in insertion order, at most one per product.
    items: Vec<OrderItem>,

    /// Sum of all line totals.
    total_amount: Money,

    /// Present once the order is paid.
    settlement: Option<Settlement>,
}

impl Order {
    /// Opens a new, empty order.
    pub fn new(customer: Customer, address: Address) -> Self {
        Self {
            id: OrderId::new(),
            customer,
            address,
            created_at: Utc::now(),
            items: Vec::new(),
            total_amount: Money::zero(),
            settlement: None,
        }
    }
}

// Query methods
impl Order {
    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        if self.settlement.is_some() {
            OrderStatus::Closed
        } else {
            OrderStatus::Open
        }
    }

    /// Returns all items in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the item holding the given product.
    pub fn item_for(&self, product_id: ProductId) -> Option<&OrderItem> {
        self.items
            .iter()
            .find(|item| item.product().id() == product_id)
    }

    pub fn contains_product(&self, product_id: ProductId) -> bool {
        self.item_for(product_id).is_some()
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Returns the sum of all line totals, zero for an empty order.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns true if the order has items.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn payment(&self) -> Option<&Payment> {
        self.settlement.as_ref().map(|s| &s.payment)
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.settlement.as_ref().map(|s| s.closed_at)
    }

    pub fn is_paid(&self) -> bool {
        self.settlement.is_some()
    }
}

// Command methods
impl Order {
    /// Adds a product to the order.
    ///
    /// Products are matched by identity, so a product can be added only once;
    /// two separately created products with the same name and price are
    /// different products. Fails with `AmountOutOfRange` if the line total or
    /// the new order total cannot be represented.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<(), OrderError> {
        if !self.status().can_add_products() {
            return Err(OrderError::AlreadyPaid { order_id: self.id });
        }

        if quantity == 0 {
            return Err(OrderError::InvalidQuantity { quantity });
        }

        if self.contains_product(product.id()) {
            return Err(OrderError::DuplicateProduct {
                product_id: product.id(),
                product_name: product.name().to_string(),
            });
        }

        let out_of_range = || OrderError::AmountOutOfRange {
            product_id: product.id(),
            quantity,
        };
        let item = OrderItem::try_new(product.clone(), quantity).ok_or_else(out_of_range)?;
        let total_amount = self
            .total_amount
            .checked_add(item.total())
            .ok_or_else(out_of_range)?;

        self.items.push(item);
        self.total_amount = total_amount;

        metrics::counter!("order_items_added_total").increment(1);
        tracing::debug!(
            order_id = %self.id,
            product_id = %product.id(),
            product = product.name(),
            quantity,
            "product added to order"
        );

        Ok(())
    }

    /// Pays the order and closes it.
    ///
    /// On error the order is left untouched.
    pub fn pay(&mut self, method: PaymentMethod) -> Result<&Payment, OrderError> {
        if !self.status().can_pay() {
            return Err(OrderError::AlreadyPaid { order_id: self.id });
        }

        if !self.has_items() {
            return Err(OrderError::EmptyOrder { order_id: self.id });
        }

        let payment = Payment::new(self, method);
        let closed_at = payment.paid_at();

        metrics::counter!("orders_paid_total").increment(1);
        tracing::info!(
            order_id = %self.id,
            amount = %payment.amount(),
            authorization_number = %payment.authorization_number(),
            "order paid"
        );

        let settlement = self.settlement.insert(Settlement { payment, closed_at });
        Ok(&settlement.payment)
    }
}
