//! Product factory.

use super::{Product, ProductDetails, ProductError, ProductKind};

/// Creates a product of the given kind.
///
/// The price must be finite and non-negative; it is kept exactly as given.
/// Every call yields a product with a fresh identity.
pub fn create_product(
    kind: ProductKind,
    name: impl Into<String>,
    price: f64,
) -> Result<Product, ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice { price });
    }

    let name = name.into();
    let product = Product::new(kind, ProductDetails::new(name, price));

    tracing::debug!(
        product_id = %product.id(),
        kind = %kind,
        name = product.name(),
        price = product.price(),
        "product created"
    );

    Ok(product)
}

/// Creates a product from a textual kind tag such as `"book"`.
pub fn create_product_from_tag(
    tag: &str,
    name: impl Into<String>,
    price: f64,
) -> Result<Product, ProductError> {
    create_product(tag.parse()?, name, price)
}
