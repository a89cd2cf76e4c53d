//! Payment methods.

use serde::{Deserialize, Serialize};

/// A credit card, identified by its number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditCard {
    number: String,
}

impl CreditCard {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the number with all but the last four characters hidden.
    pub fn masked_number(&self) -> String {
        let visible = self.number.chars().count().saturating_sub(4);
        self.number
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible && c.is_ascii_digit() { '*' } else { c })
            .collect()
    }
}

/// The means by which an order is paid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PaymentMethod {
    CreditCard(CreditCard),
}

impl From<CreditCard> for PaymentMethod {
    fn from(card: CreditCard) -> Self {
        PaymentMethod::CreditCard(card)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::CreditCard(card) => write!(f, "credit card {}", card.masked_number()),
        }
    }
}
