//! GetPaymentStatusHandler - Query handler for payment status polling.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::ports::{GatewayPayment, PaymentGateway};

/// Query for a payment's current provider status.
#[derive(Debug, Clone)]
pub struct GetPaymentStatusQuery {
    pub payment_id: String,
}

/// Handler for the status poll the checkout page runs while waiting for
/// the payment to settle.
pub struct GetPaymentStatusHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl GetPaymentStatusHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        query: GetPaymentStatusQuery,
    ) -> Result<GatewayPayment, BillingError> {
        if query.payment_id.trim().is_empty() {
            return Err(BillingError::validation(
                "paymentId",
                "Payment ID is required",
            ));
        }

        self.gateway
            .payment_by_id(&query.payment_id)
            .await
            .map_err(|e| BillingError::gateway(e.to_string(), e.status))
    }
}
