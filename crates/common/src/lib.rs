//! Shared types for the order domain.

pub mod types;

pub use types::{Address, Customer, CustomerId, OrderId, ProductId};
