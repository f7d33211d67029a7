//! CreatePaymentHandler - Command handler for creating a gateway charge.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::domain::foundation::Timestamp;
use crate::ports::{CreatePaymentRequest, GatewayPayment, PaymentGateway};

const DEFAULT_BILLING_TYPE: &str = "CREDIT_CARD";
const DEFAULT_DESCRIPTION: &str = "Subscription Payment";

/// Command to create a payment with the gateway.
#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
    /// Provider's customer reference.
    pub customer: String,

    pub billing_type: Option<String>,
    pub value: f64,

    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,

    pub external_reference: Option<String>,
    pub description: Option<String>,

    /// Webhook callback URL; falls back to the configured one.
    pub callback: Option<String>,
}

/// Handler for payment creation.
///
/// Defaults the webhook callback to the configured URL so confirmed
/// payments flow back through the reconciliation endpoint.
pub struct CreatePaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
    callback_url: Option<String>,
}

impl CreatePaymentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>, callback_url: Option<String>) -> Self {
        Self {
            gateway,
            callback_url,
        }
    }

    pub async fn handle(&self, cmd: CreatePaymentCommand) -> Result<GatewayPayment, BillingError> {
        if cmd.customer.trim().is_empty() {
            return Err(BillingError::validation("customer", "Customer is required"));
        }
        if cmd.value <= 0.0 {
            return Err(BillingError::validation("value", "Value must be positive"));
        }
        if cmd.due_date.trim().is_empty() {
            return Err(BillingError::validation("dueDate", "Due date is required"));
        }

        let request = CreatePaymentRequest {
            customer: cmd.customer,
            billing_type: cmd
                .billing_type
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| DEFAULT_BILLING_TYPE.to_string()),
            value: cmd.value,
            due_date: cmd.due_date,
            external_reference: cmd
                .external_reference
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| format!("payment_{}", Timestamp::now().as_unix_millis())),
            description: cmd
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            callback_url: cmd
                .callback
                .filter(|c| !c.is_empty())
                .or_else(|| self.callback_url.clone()),
        };

        self.gateway
            .create_payment(request)
            .await
            .map_err(|e| BillingError::gateway(e.to_string(), e.status))
    }
}
