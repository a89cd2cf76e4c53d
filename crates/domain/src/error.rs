//! Domain error types.

use thiserror::Error;

use crate::order::OrderError;
use crate::product::ProductError;

/// Broad category of a domain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedKind,
    InvalidArgument,
    DuplicateProduct,
    AlreadyPaid,
    EmptyOrder,
}

/// Errors that can occur during domain operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// An error occurred while creating a product.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// An error occurred in the order aggregate.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

impl DomainError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Product(ProductError::UnsupportedKind { .. }) => ErrorKind::UnsupportedKind,
            DomainError::Product(ProductError::InvalidPrice { .. })
            | DomainError::Order(
                OrderError::InvalidQuantity { .. } | OrderError::AmountOutOfRange { .. },
            ) => ErrorKind::InvalidArgument,
            DomainError::Order(OrderError::DuplicateProduct { .. }) => ErrorKind::DuplicateProduct,
            DomainError::Order(OrderError::AlreadyPaid { .. }) => ErrorKind::AlreadyPaid,
            DomainError::Order(OrderError::EmptyOrder { .. }) => ErrorKind::EmptyOrder,
        }
    }
}

#[cfg(test)]
mod tests {
    use common::{OrderId, ProductId};

    use super::*;

    #[test]
    fn test_kind_groups_argument_errors() {
        let price: DomainError = ProductError::InvalidPrice { price: -1.0 }.into();
        let quantity: DomainError = OrderError::InvalidQuantity { quantity: 0 }.into();
        let amount: DomainError = OrderError::AmountOutOfRange {
            product_id: ProductId::new(),
            quantity: 8,
        }
        .into();
        assert_eq!(price.kind(), ErrorKind::InvalidArgument);
        assert_eq!(quantity.kind(), ErrorKind::InvalidArgument);
        assert_eq!(amount.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_kind_of_order_errors() {
        let order_id = OrderId::new();
        let paid: DomainError = OrderError::AlreadyPaid { order_id }.into();
        let empty: DomainError = OrderError::EmptyOrder { order_id }.into();
        assert_eq!(paid.kind(), ErrorKind::AlreadyPaid);
        assert_eq!(empty.kind(), ErrorKind::EmptyOrder);
    }

    #[test]
    fn test_display_includes_source_message() {
        let err: DomainError = ProductError::UnsupportedKind {
            kind: "voucher".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UnsupportedKind);
        assert_eq!(
            err.to_string(),
            "Product error: Unsupported product kind: voucher"
        );
    }
}
