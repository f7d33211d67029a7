//! Inbound webhook event model for ASAAS payment lifecycle notifications.

use serde::{Deserialize, Serialize};

/// Event type on an inbound webhook delivery.
///
/// Only the two payment-completion types trigger reconciliation; every
/// other type is acknowledged and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentEventType {
    PaymentReceived,
    PaymentConfirmed,
    Other(String),
}

impl PaymentEventType {
    /// Returns true if this event signals a completed payment.
    pub fn is_payment_completion(&self) -> bool {
        matches!(
            self,
            PaymentEventType::PaymentReceived | PaymentEventType::PaymentConfirmed
        )
    }

    /// Returns the provider wire name.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentEventType::PaymentReceived => "PAYMENT_RECEIVED",
            PaymentEventType::PaymentConfirmed => "PAYMENT_CONFIRMED",
            PaymentEventType::Other(s) => s,
        }
    }
}

impl From<String> for PaymentEventType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PAYMENT_RECEIVED" => PaymentEventType::PaymentReceived,
            "PAYMENT_CONFIRMED" => PaymentEventType::PaymentConfirmed,
            _ => PaymentEventType::Other(s),
        }
    }
}

impl From<PaymentEventType> for String {
    fn from(t: PaymentEventType) -> Self {
        t.as_str().to_string()
    }
}

/// Payment status reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Confirmed,
    Received,
    Other(String),
}

impl PaymentStatus {
    /// Returns true if the payment has settled.
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Confirmed | PaymentStatus::Received)
    }

    /// Returns the provider wire name.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Confirmed => "CONFIRMED",
            PaymentStatus::Received => "RECEIVED",
            PaymentStatus::Other(s) => s,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CONFIRMED" => PaymentStatus::Confirmed,
            "RECEIVED" => PaymentStatus::Received,
            _ => PaymentStatus::Other(s),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(s: PaymentStatus) -> Self {
        s.as_str().to_string()
    }
}

/// Payment object nested in a webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    /// Provider-assigned payment identifier.
    pub id: String,

    /// Provider customer reference of the payer.
    pub customer: String,

    pub status: PaymentStatus,

    /// Monetary value in the provider's account currency.
    pub value: f64,

    #[serde(default)]
    pub description: String,

    /// Billing method (e.g. `CREDIT_CARD`, `PIX`, `BOLETO`).
    #[serde(default)]
    pub billing_type: String,
}
