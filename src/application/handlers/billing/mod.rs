//! Billing command and query handlers.
//!
//! One handler per operation, each constructed from `Arc<dyn Port>`
//! dependencies so the HTTP layer can wire real adapters and tests can
//! inject fakes.

mod check_customer;
mod create_customer;
mod create_payment;
mod get_payment_status;
mod process_payment_event;

pub use check_customer::{CheckCustomerHandler, CheckCustomerQuery};
pub use create_customer::{CreateCustomerCommand, CreateCustomerHandler};
pub use create_payment::{CreatePaymentCommand, CreatePaymentHandler};
pub use get_payment_status::{GetPaymentStatusHandler, GetPaymentStatusQuery};
pub use process_payment_event::{
    ProcessPaymentEventCommand, ProcessPaymentEventHandler, ProcessPaymentEventOutcome,
};
