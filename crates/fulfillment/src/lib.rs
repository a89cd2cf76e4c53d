//! Post-payment fulfillment for orders.
//!
//! A [`Fulfillment`] walks the items of a paid order in insertion order and
//! hands each one to a [`FulfillmentHandler`]. The default handler runs the
//! product's own fulfillment action.
//!
//! Execution stops at the first failing item. Nothing is rolled back: the
//! order stays paid.

pub mod error;
pub mod handler;
pub mod process;

pub use error::FulfillmentError;
pub use handler::{FulfillmentHandler, ProductHandler, RecordingHandler};
pub use process::Fulfillment;
