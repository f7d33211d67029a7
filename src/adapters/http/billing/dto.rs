//! Request and response JSON types for the billing endpoints.
//!
//! Field names mirror what the front end already sends to the original
//! serverless functions (camelCase, ASAAS vocabulary).

use serde::{Deserialize, Serialize};

use crate::domain::billing::PaymentNotification;
use crate::ports::{GatewayCustomer, GatewayPayment};

/// Inbound webhook delivery envelope.
///
/// Non-payment deliveries may omit the payment object entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEventDto {
    pub event: String,
    #[serde(default)]
    pub payment: Option<PaymentNotification>,
}

/// Request body for customer registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequestDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cpf_cnpj: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request body for the customer existence check.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckCustomerRequestDto {
    #[serde(default)]
    pub email: String,
}

/// Request body for payment creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequestDto {
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub billing_type: Option<String>,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub external_reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub callback: Option<String>,
}

/// Customer representation returned to the front end.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub external_reference: Option<String>,
}

impl From<GatewayCustomer> for CustomerResponse {
    fn from(c: GatewayCustomer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            cpf_cnpj: c.cpf_cnpj,
            external_reference: c.external_reference,
        }
    }
}

/// Response for the customer existence check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckCustomerResponse {
    pub exists: bool,
    pub customer: Option<CustomerResponse>,
}

/// Payment representation returned to the front end.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: String,
    pub customer: String,
    pub status: String,
    pub value: f64,
    pub billing_type: Option<String>,
    pub due_date: Option<String>,
    pub description: Option<String>,
    pub invoice_url: Option<String>,
}

impl From<GatewayPayment> for PaymentResponse {
    fn from(p: GatewayPayment) -> Self {
        Self {
            id: p.id,
            customer: p.customer,
            status: p.status,
            value: p.value,
            billing_type: p.billing_type,
            due_date: p.due_date,
            description: p.description,
            invoice_url: p.invoice_url,
        }
    }
}

/// Error body for the JSON billing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::PaymentStatus;

    #[test]
    fn webhook_event_deserializes_full_delivery() {
        let json = r#"{
            "event": "PAYMENT_CONFIRMED",
            "payment": {
                "id": "pay_1",
                "customer": "cus_1",
                "status": "CONFIRMED",
                "value": 19.90,
                "description": "Monthly Premium",
                "billingType": "PIX"
            }
        }"#;

        let dto: WebhookEventDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.event, "PAYMENT_CONFIRMED");
        let payment = dto.payment.unwrap();
        assert_eq!(payment.status, PaymentStatus::Confirmed);
    }

    #[test]
    fn webhook_event_tolerates_missing_payment() {
        let json = r#"{"event": "SUBSCRIPTION_CREATED"}"#;
        let dto: WebhookEventDto = serde_json::from_str(json).unwrap();
        assert!(dto.payment.is_none());
    }

    #[test]
    fn create_payment_request_uses_camel_case() {
        let json = r#"{
            "customer": "cus_1",
            "billingType": "PIX",
            "value": 14.90,
            "dueDate": "2026-09-30"
        }"#;

        let dto: CreatePaymentRequestDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.billing_type.as_deref(), Some("PIX"));
        assert_eq!(dto.due_date, "2026-09-30");
        assert!(dto.callback.is_none());
    }

    #[test]
    fn create_payment_request_carries_caller_callback() {
        let json = r#"{
            "customer": "cus_1",
            "value": 14.90,
            "dueDate": "2026-09-30",
            "callback": "https://app.example.com/api/webhooks/asaas"
        }"#;

        let dto: CreatePaymentRequestDto = serde_json::from_str(json).unwrap();
        assert_eq!(
            dto.callback.as_deref(),
            Some("https://app.example.com/api/webhooks/asaas")
        );
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("Name and email are required")).unwrap();
        assert!(json.get("details").is_none());
    }
}
