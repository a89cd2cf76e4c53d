//! Integration tests for the order lifecycle.
//!
//! These tests drive products, orders, and payments through the public API
//! only.

use common::{Address, Customer};
use domain::{
    CreditCard, DomainError, ErrorKind, Money, Order, OrderError, OrderStatus, PaymentMethod,
    Product, ProductKind, create_product,
};

fn new_order() -> Order {
    Order::new(Customer::new(), Address::new())
}

fn card() -> PaymentMethod {
    CreditCard::new("43567890-987654367").into()
}

mod products {
    use super::*;

    #[test]
    fn factory_preserves_inputs_for_every_kind() {
        let prices = [0.0, 0.01, 5.0, 29.9, 35.0, 120.0, 999_999.99];
        for kind in ProductKind::ALL {
            for price in prices {
                let product = create_product(kind, "Catalog item", price).unwrap();
                assert_eq!(product.name(), "Catalog item");
                assert_eq!(product.price(), price);
            }
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = DomainError::from(domain::create_product_from_tag("gift", "Card", 10.0).unwrap_err());
        assert_eq!(err.kind(), ErrorKind::UnsupportedKind);
    }
}

mod order_lifecycle {
    use super::*;

    fn reference_catalog() -> Vec<(Product, u32)> {
        vec![
            (
                create_product(ProductKind::Physical, "Flowered t-shirt", 35.00).unwrap(),
                2,
            ),
            (
                create_product(ProductKind::Membership, "Familiar plan", 29.90).unwrap(),
                1,
            ),
            (
                create_product(
                    ProductKind::Book,
                    "The Hitchhiker's Guide to the Galaxy",
                    120.00,
                )
                .unwrap(),
                1,
            ),
            (
                create_product(ProductKind::Digital, "Stairway to Heaven", 5.00).unwrap(),
                1,
            ),
        ]
    }

    #[test]
    fn reference_order_is_paid_in_full() {
        let mut order = new_order();
        for (product, quantity) in reference_catalog() {
            order.add_product(&product, quantity).unwrap();
        }

        assert_eq!(order.item_count(), 4);
        assert_eq!(order.total_amount(), Money::from_cents(22490));
        assert_eq!(order.total_amount().to_string(), "$224.90");

        let payment = order.pay(card()).unwrap();
        assert_eq!(payment.amount().to_f64(), 224.90);
        assert_eq!(payment.payment_method(), &card());

        assert_eq!(order.status(), OrderStatus::Closed);
        assert!(order.closed_at().is_some());
    }

    #[test]
    fn invoice_points_back_to_the_paid_order() {
        let mut order = new_order();
        let (product, quantity) = reference_catalog().remove(0);
        order.add_product(&product, quantity).unwrap();
        order.pay(card()).unwrap();

        let payment = order.payment().unwrap();
        assert_eq!(payment.order_id(), order.id());
        assert_eq!(payment.invoice().order_id(), order.id());
        assert_eq!(payment.invoice().billing_address(), order.address());
        assert_eq!(payment.invoice().shipping_address(), order.address());
    }

    #[test]
    fn payment_and_close_time_appear_together() {
        let mut order = new_order();
        assert_eq!(order.payment().is_some(), order.closed_at().is_some());

        let err = order.pay(card()).unwrap_err();
        assert_eq!(DomainError::from(err).kind(), ErrorKind::EmptyOrder);
        assert!(order.payment().is_none());
        assert!(order.closed_at().is_none());

        let product = create_product(ProductKind::Book, "Emma", 20.0).unwrap();
        order.add_product(&product, 1).unwrap();
        order.pay(card()).unwrap();
        assert_eq!(
            order.closed_at(),
            order.payment().map(|payment| payment.paid_at())
        );
    }

    #[test]
    fn second_payment_is_refused() {
        let mut order = new_order();
        let product = create_product(ProductKind::Digital, "Song", 5.0).unwrap();
        order.add_product(&product, 1).unwrap();

        let first = order.pay(card()).unwrap().clone();
        let closed_at = order.closed_at();

        let err = order.pay(card()).unwrap_err();
        assert!(matches!(err, OrderError::AlreadyPaid { .. }));
        assert_eq!(order.payment(), Some(&first));
        assert_eq!(order.closed_at(), closed_at);
    }

    #[test]
    fn payments_get_distinct_authorization_numbers() {
        let mut numbers = Vec::new();
        for _ in 0..5 {
            let mut order = new_order();
            let product = create_product(ProductKind::Digital, "Song", 1.0).unwrap();
            order.add_product(&product, 1).unwrap();
            numbers.push(order.pay(card()).unwrap().authorization_number());
        }

        let mut sorted = numbers.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), numbers.len());
    }
}

mod item_rules {
    use super::*;

    #[test]
    fn items_follow_call_order() {
        let mut order = new_order();
        let products: Vec<_> = (1..=5)
            .map(|i| create_product(ProductKind::Physical, format!("Item {i}"), f64::from(i)).unwrap())
            .collect();

        for product in &products {
            order.add_product(product, 1).unwrap();
        }

        let ids: Vec<_> = order.items().iter().map(|item| item.product().id()).collect();
        let expected: Vec<_> = products.iter().map(Product::id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn duplicate_product_leaves_order_unchanged() {
        let mut order = new_order();
        let product = create_product(ProductKind::Book, "Dune", 45.0).unwrap();
        order.add_product(&product, 2).unwrap();

        let err = order.add_product(&product, 1).unwrap_err();
        assert_eq!(DomainError::from(err).kind(), ErrorKind::DuplicateProduct);
        assert_eq!(order.item_count(), 1);
        assert_eq!(order.total_amount(), Money::from_cents(9000));
    }

    #[test]
    fn zero_quantity_is_an_invalid_argument() {
        let mut order = new_order();
        let product = create_product(ProductKind::Book, "Dune", 45.0).unwrap();

        let err = order.add_product(&product, 0).unwrap_err();
        assert_eq!(DomainError::from(err).kind(), ErrorKind::InvalidArgument);
        assert!(!order.has_items());
    }
}
