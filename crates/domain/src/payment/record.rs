//! Payment records.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::order::Order;

use super::{Invoice, PaymentMethod};

/// Last authorization number handed out in this process.
static LAST_AUTHORIZATION: AtomicU64 = AtomicU64::new(0);

/// Authorization number of a payment.
///
/// Derived from the pay time in milliseconds, bumped when needed so that
/// numbers are strictly increasing and never repeat within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationNumber(u64);

impl AuthorizationNumber {
    fn issue(paid_at: DateTime<Utc>) -> Self {
        let millis = u64::try_from(paid_at.timestamp_millis()).unwrap_or(0);
        let next = |last: u64| millis.max(last.saturating_add(1));

        // The closure never declines, so both arms carry the previous value.
        let last = match LAST_AUTHORIZATION
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(next(last)))
        {
            Ok(last) | Err(last) => last,
        };

        Self(next(last))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AuthorizationNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completed charge against an order.
///
/// Created only by [`Order::pay`]. The amount is the order total at the time
/// of payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    order_id: OrderId,
    payment_method: PaymentMethod,
    paid_at: DateTime<Utc>,
    authorization_number: AuthorizationNumber,
    amount: Money,
    invoice: Invoice,
}

impl Payment {
    pub(crate) fn new(order: &Order, payment_method: PaymentMethod) -> Self {
        let paid_at = Utc::now();
        Self {
            order_id: order.id(),
            payment_method,
            paid_at,
            authorization_number: AuthorizationNumber::issue(paid_at),
            amount: order.total_amount(),
            invoice: Invoice::new(order),
        }
    }

    /// Returns the id of the paid order.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn payment_method(&self) -> &PaymentMethod {
        &self.payment_method
    }

    pub fn paid_at(&self) -> DateTime<Utc> {
        self.paid_at
    }

    pub fn authorization_number(&self) -> AuthorizationNumber {
        self.authorization_number
    }

    /// Returns the amount charged.
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }
}
