//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentGateway` - ASAAS customer/payment API access
//! - `ProfileStore` - profile lookups and entitlement persistence

mod payment_gateway;
mod profile_store;

pub use payment_gateway::{
    CreateCustomerRequest, CreatePaymentRequest, GatewayCustomer, GatewayError, GatewayErrorCode,
    GatewayPayment, PaymentGateway,
};
pub use profile_store::ProfileStore;
