//! Payments, payment methods, and invoices.

mod invoice;
mod method;
mod record;

pub use invoice::Invoice;
pub use method::{CreditCard, PaymentMethod};
pub use record::{AuthorizationNumber, Payment};
