//! Product variants and their fulfillment actions.

use common::ProductId;
use serde::Serialize;
use thiserror::Error;

use crate::money::Money;
use crate::order::Order;

use super::ProductKind;

/// Reason a product's fulfillment action could not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FulfillmentFailure {
    reason: String,
}

impl FulfillmentFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Fields shared by every product variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    id: ProductId,
    name: String,
    price: f64,
}

impl ProductDetails {
    pub(crate) fn new(name: String, price: f64) -> Self {
        Self {
            id: ProductId::new(),
            name,
            price,
        }
    }
}

/// A sellable product.
///
/// Built through [`create_product`](super::create_product). A clone refers to
/// the same product: it keeps the [`ProductId`] that orders use to detect
/// duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Product {
    Physical(ProductDetails),
    Book(ProductDetails),
    Digital(ProductDetails),
    Membership(ProductDetails),
}

impl Product {
    pub(crate) fn new(kind: ProductKind, details: ProductDetails) -> Self {
        match kind {
            ProductKind::Physical => Product::Physical(details),
            ProductKind::Book => Product::Book(details),
            ProductKind::Digital => Product::Digital(details),
            ProductKind::Membership => Product::Membership(details),
        }
    }

    fn details(&self) -> &ProductDetails {
        match self {
            Product::Physical(details)
            | Product::Book(details)
            | Product::Digital(details)
            | Product::Membership(details) => details,
        }
    }

    /// Returns the identity handle of this product.
    pub fn id(&self) -> ProductId {
        self.details().id
    }

    pub fn name(&self) -> &str {
        &self.details().name
    }

    /// Returns the unit price exactly as given to the factory.
    pub fn price(&self) -> f64 {
        self.details().price
    }

    /// Returns the unit price as money, or `None` if it lies outside the
    /// range money can represent.
    pub fn unit_price(&self) -> Option<Money> {
        Money::from_f64(self.price())
    }

    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Physical(_) => ProductKind::Physical,
            Product::Book(_) => ProductKind::Book,
            Product::Digital(_) => ProductKind::Digital,
            Product::Membership(_) => ProductKind::Membership,
        }
    }

    /// Runs this product's fulfillment action for a paid order.
    ///
    /// Fails when the order does not contain this product.
    pub fn fulfill(&self, order: &Order) -> Result<(), FulfillmentFailure> {
        let quantity = order
            .item_for(self.id())
            .map(|item| item.quantity())
            .ok_or_else(|| {
                FulfillmentFailure::new(format!(
                    "product {} is not part of order {}",
                    self.id(),
                    order.id()
                ))
            })?;

        let order_id = order.id();
        let product = self.name();
        let action = self.kind().fulfillment_action();

        match self {
            Product::Physical(_) => {
                tracing::info!(%order_id, product, quantity, action, "physical product fulfilled");
            }
            Product::Book(_) => {
                tracing::info!(%order_id, product, quantity, action, "book product fulfilled");
            }
            Product::Digital(_) => {
                tracing::info!(%order_id, product, action, "digital product fulfilled");
            }
            Product::Membership(_) => {
                tracing::info!(
                    %order_id,
                    product,
                    customer_id = %order.customer().id(),
                    action,
                    "membership product fulfilled"
                );
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit_price() {
            Some(price) => write!(f, "{} ({}, {})", self.name(), self.kind(), price),
            None => write!(f, "{} ({}, {})", self.name(), self.kind(), self.price()),
        }
    }
}
