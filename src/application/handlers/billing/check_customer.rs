//! CheckCustomerHandler - Query handler for customer lookup by email.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::ports::{GatewayCustomer, PaymentGateway};

/// Query for an existing gateway customer by email.
#[derive(Debug, Clone)]
pub struct CheckCustomerQuery {
    pub email: String,
}

/// Handler for the customer existence check the checkout flow runs
/// before registering a new customer.
pub struct CheckCustomerHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CheckCustomerHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        query: CheckCustomerQuery,
    ) -> Result<Option<GatewayCustomer>, BillingError> {
        if query.email.trim().is_empty() {
            return Err(BillingError::validation("email", "Email is required"));
        }

        self.gateway
            .customer_by_email(&query.email)
            .await
            .map_err(|e| BillingError::gateway(e.to_string(), e.status))
    }
}
