//! Product kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ProductError;

/// The kind of a product, which decides how it is fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// A tangible good shipped in a parcel.
    Physical,

    /// A printed book.
    Book,

    /// Downloadable media.
    Digital,

    /// A subscription plan.
    Membership,
}

impl ProductKind {
    /// All supported kinds.
    pub const ALL: [ProductKind; 4] = [
        ProductKind::Physical,
        ProductKind::Book,
        ProductKind::Digital,
        ProductKind::Membership,
    ];

    /// Returns the kind tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Physical => "physical",
            ProductKind::Book => "book",
            ProductKind::Digital => "digital",
            ProductKind::Membership => "membership",
        }
    }

    /// Describes what fulfilling a product of this kind does.
    pub fn fulfillment_action(&self) -> &'static str {
        match self {
            ProductKind::Physical => "ship parcel",
            ProductKind::Book => "ship book",
            ProductKind::Digital => "deliver download link",
            ProductKind::Membership => "activate membership",
        }
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ProductKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ProductError::UnsupportedKind {
                kind: s.to_string(),
            })
    }
}
