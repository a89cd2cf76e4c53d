//! Order status.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Status transitions:
/// ```text
/// Open ──pay──► Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// No payment yet; products can be added.
    #[default]
    Open,

    /// Paid and closed (terminal state).
    Closed,
}

impl OrderStatus {
    /// Returns true if products can be added in this status.
    pub fn can_add_products(&self) -> bool {
        matches!(self, OrderStatus::Open)
    }

    /// Returns true if the order can be paid in this status.
    pub fn can_pay(&self) -> bool {
        matches!(self, OrderStatus::Open)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, OrderStatus::Closed)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "Open",
            OrderStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_open() {
        assert_eq!(OrderStatus::default(), OrderStatus::Open);
    }

    #[test]
    fn test_only_open_orders_change() {
        assert!(OrderStatus::Open.can_add_products());
        assert!(OrderStatus::Open.can_pay());
        assert!(!OrderStatus::Closed.can_add_products());
        assert!(!OrderStatus::Closed.can_pay());
        assert!(OrderStatus::Closed.is_closed());
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderStatus::Open.to_string(), "Open");
        assert_eq!(OrderStatus::Closed.to_string(), "Closed");
    }
}
