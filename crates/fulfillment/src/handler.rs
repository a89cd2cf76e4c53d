//! Per-item fulfillment handlers.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use common::ProductId;
use domain::{FulfillmentFailure, Order, OrderItem};

/// Fulfills a single order item.
pub trait FulfillmentHandler {
    fn fulfill(&self, item: &OrderItem, order: &Order) -> Result<(), FulfillmentFailure>;
}

/// Runs each product's own fulfillment action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductHandler;

impl FulfillmentHandler for ProductHandler {
    fn fulfill(&self, item: &OrderItem, order: &Order) -> Result<(), FulfillmentFailure> {
        item.product().fulfill(order)
    }
}

#[derive(Debug, Default)]
struct RecordingState {
    dispatched: Vec<ProductId>,
    fail_on: HashSet<ProductId>,
}

/// Handler for testing that records every dispatched product.
///
/// Delegates to [`ProductHandler`] unless told to fail on a product. Clones
/// share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    state: Arc<RwLock<RecordingState>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the handler to fail when it reaches the given product.
    pub fn set_fail_on(&self, product_id: ProductId) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on
            .insert(product_id);
    }

    /// Returns the products dispatched so far, in dispatch order.
    pub fn dispatched(&self) -> Vec<ProductId> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .dispatched
            .clone()
    }

    pub fn dispatch_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .dispatched
            .len()
    }
}

impl FulfillmentHandler for RecordingHandler {
    fn fulfill(&self, item: &OrderItem, order: &Order) -> Result<(), FulfillmentFailure> {
        let product_id = item.product().id();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.dispatched.push(product_id);

        if state.fail_on.contains(&product_id) {
            return Err(FulfillmentFailure::new("fulfillment unavailable"));
        }

        ProductHandler.fulfill(item, order)
    }
}

impl<H: FulfillmentHandler + ?Sized> FulfillmentHandler for &H {
    fn fulfill(&self, item: &OrderItem, order: &Order) -> Result<(), FulfillmentFailure> {
        (**self).fulfill(item, order)
    }
}
