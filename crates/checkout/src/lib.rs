//! Reference checkout: build an order, pay it, and fulfill it.

pub mod config;
pub mod error;

use common::{Address, Customer};
use domain::{CreditCard, Order, create_product_from_tag};
use fulfillment::Fulfillment;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use config::{Config, LogFormat};
pub use error::CheckoutError;

/// A product to buy and how many of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLine {
    pub kind: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub quantity: u32,
}

/// The cart checked out by the binary.
pub const REFERENCE_CART: [CartLine; 4] = [
    CartLine {
        kind: "physical",
        name: "Flowered t-shirt",
        price: 35.00,
        quantity: 2,
    },
    CartLine {
        kind: "membership",
        name: "Familiar plan",
        price: 29.90,
        quantity: 1,
    },
    CartLine {
        kind: "book",
        name: "The Hitchhiker's Guide to the Galaxy",
        price: 120.00,
        quantity: 1,
    },
    CartLine {
        kind: "digital",
        name: "Stairway to Heaven",
        price: 5.00,
        quantity: 1,
    },
];

/// Installs the global tracing subscriber.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Opens an order holding one freshly created product per cart line.
pub fn build_order(cart: &[CartLine]) -> Result<Order, CheckoutError> {
    let mut order = Order::new(Customer::new(), Address::new());
    for line in cart {
        let product = create_product_from_tag(line.kind, line.name, line.price)?;
        order.add_product(&product, line.quantity)?;
    }
    Ok(order)
}

/// Builds, pays, and fulfills an order for `cart`.
///
/// Returns the paid order. A fulfillment error is returned after payment,
/// so the order it refers to has still been charged.
#[tracing::instrument(skip_all, fields(lines = cart.len()))]
pub fn run_checkout(cart: &[CartLine], config: &Config) -> Result<Order, CheckoutError> {
    let mut order = build_order(cart)?;
    order.pay(CreditCard::new(config.card_number.clone()).into())?;

    let mut fulfillment = Fulfillment::new();
    fulfillment.set_order(&order);
    fulfillment.execute()?;

    Ok(order)
}
