//! The fulfillment process.

use std::time::Instant;

use domain::Order;

use crate::error::{FulfillmentError, Result};
use crate::handler::{FulfillmentHandler, ProductHandler};

/// Dispatches every item of a paid order to its fulfillment action.
///
/// Transient: set an order, call [`Fulfillment::execute`], drop it.
#[derive(Debug, Clone)]
pub struct Fulfillment<'a, H = ProductHandler> {
    order: Option<&'a Order>,
    handler: H,
}

impl Fulfillment<'_, ProductHandler> {
    /// Creates a fulfillment that runs each product's own action.
    pub fn new() -> Self {
        Self::with_handler(ProductHandler)
    }
}

impl Default for Fulfillment<'_, ProductHandler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, H: FulfillmentHandler> Fulfillment<'a, H> {
    /// Creates a fulfillment that dispatches items through `handler`.
    pub fn with_handler(handler: H) -> Self {
        Self {
            order: None,
            handler,
        }
    }

    /// Sets the order to fulfill, replacing any previous one.
    pub fn set_order(&mut self, order: &'a Order) {
        self.order = Some(order);
    }

    pub fn order(&self) -> Option<&'a Order> {
        self.order
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Fulfills every item of the order, in insertion order.
    ///
    /// Fails without dispatching anything when no order is set or the order
    /// is unpaid. Stops at the first item whose action fails and reports its
    /// position.
    #[tracing::instrument(skip(self), fields(order_id = tracing::field::Empty))]
    pub fn execute(&self) -> Result<()> {
        let order = self.order.ok_or(FulfillmentError::NoOrder)?;
        let order_id = order.id();
        tracing::Span::current().record("order_id", tracing::field::display(order_id));

        if !order.is_paid() {
            return Err(FulfillmentError::OrderNotPaid { order_id });
        }

        let start = Instant::now();
        for (position, item) in order.items().iter().enumerate() {
            let product = item.product();

            if let Err(source) = self.handler.fulfill(item, order) {
                metrics::counter!("fulfillment_failed_total").increment(1);
                tracing::warn!(
                    %order_id,
                    position,
                    product_id = %product.id(),
                    product = product.name(),
                    reason = %source,
                    "fulfillment failed"
                );
                return Err(FulfillmentError::FulfillmentFailed {
                    position,
                    product_id: product.id(),
                    product_name: product.name().to_string(),
                    source,
                });
            }

            metrics::counter!("fulfillment_actions_total", "kind" => product.kind().as_str())
                .increment(1);
        }

        metrics::histogram!("fulfillment_duration_seconds").record(start.elapsed().as_secs_f64());
        tracing::info!(%order_id, items = order.item_count(), "order fulfilled");

        Ok(())
    }
}
