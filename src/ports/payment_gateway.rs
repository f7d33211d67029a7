//! Payment gateway port for the external billing provider.
//!
//! Defines the contract for ASAAS API access: customer lookups during
//! webhook reconciliation, plus the customer/payment management calls the
//! front end proxies through this service.
//!
//! # Design
//!
//! - **Single-shot**: every call is one outbound request, no retry
//! - **Gateway-shaped**: DTOs mirror what the provider exposes, not the
//!   local data model

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Fetch a customer by the provider's customer reference.
    ///
    /// Used to resolve the paying customer's email during webhook
    /// reconciliation. A non-success provider response is an error.
    async fn customer_by_reference(
        &self,
        customer_id: &str,
    ) -> Result<GatewayCustomer, GatewayError>;

    /// Look up a customer by registered email, if one exists.
    async fn customer_by_email(&self, email: &str)
        -> Result<Option<GatewayCustomer>, GatewayError>;

    /// Register a new customer with the provider.
    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<GatewayCustomer, GatewayError>;

    /// Create a payment (charge) for an existing customer.
    async fn create_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<GatewayPayment, GatewayError>;

    /// Fetch a payment by the provider's payment identifier.
    async fn payment_by_id(&self, payment_id: &str) -> Result<GatewayPayment, GatewayError>;
}

/// Customer record in the payment system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayCustomer {
    /// Provider's customer reference (e.g. `cus_...`).
    pub id: String,

    pub name: Option<String>,

    /// Registered email; absent on some imported customers.
    pub email: Option<String>,

    /// Brazilian tax id (CPF/CNPJ) if registered.
    pub cpf_cnpj: Option<String>,

    /// Caller-supplied external reference.
    pub external_reference: Option<String>,
}

/// Request to register a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub cpf_cnpj: String,
    pub phone: Option<String>,
    pub external_reference: String,
}

/// Request to create a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Provider's customer reference.
    pub customer: String,

    /// Billing method (e.g. `CREDIT_CARD`, `PIX`, `BOLETO`).
    pub billing_type: String,

    pub value: f64,

    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,

    pub external_reference: String,
    pub description: String,

    /// Webhook callback URL the provider should notify.
    pub callback_url: Option<String>,
}

/// Payment record in the payment system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayPayment {
    /// Provider's payment identifier (e.g. `pay_...`).
    pub id: String,

    /// Provider's customer reference.
    pub customer: String,

    /// Provider status string (e.g. `PENDING`, `CONFIRMED`).
    pub status: String,

    pub value: f64,
    pub billing_type: Option<String>,
    pub due_date: Option<String>,
    pub description: Option<String>,

    /// Hosted invoice URL the payer can open.
    pub invoice_url: Option<String>,
}

/// Error codes for gateway failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Credentials missing or rejected by the provider.
    Unauthorized,

    /// The referenced customer or payment does not exist.
    NotFound,

    /// Provider answered with another non-success status.
    Provider,

    /// The request never completed (DNS, connect, timeout).
    Network,

    /// Provider answered 2xx but the body was not what we expect.
    InvalidResponse,
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct GatewayError {
    pub code: GatewayErrorCode,
    pub message: String,

    /// HTTP status from the provider, when one was received.
    pub status: Option<u16>,
}

impl GatewayError {
    /// Creates a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    /// Attaches the upstream HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Creates an error for a non-success provider response.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        let code = match status {
            401 | 403 => GatewayErrorCode::Unauthorized,
            404 => GatewayErrorCode::NotFound,
            _ => GatewayErrorCode::Provider,
        };
        Self::new(code, message).with_status(status)
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Network, message)
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_maps_status_to_code() {
        assert_eq!(
            GatewayError::provider(401, "denied").code,
            GatewayErrorCode::Unauthorized
        );
        assert_eq!(
            GatewayError::provider(404, "missing").code,
            GatewayErrorCode::NotFound
        );
        assert_eq!(
            GatewayError::provider(500, "boom").code,
            GatewayErrorCode::Provider
        );
    }

    #[test]
    fn provider_error_records_status() {
        let err = GatewayError::provider(503, "unavailable");
        assert_eq!(err.status, Some(503));
    }
}
