//! ProcessPaymentEventHandler - Command handler for payment webhook reconciliation.

use std::sync::Arc;

use crate::domain::billing::{
    BillingError, BillingRules, Entitlement, PaymentEventType, PaymentNotification, PaymentRecord,
    SubscriptionTier,
};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{PaymentGateway, ProfileStore};

/// Command to process one inbound payment webhook delivery.
#[derive(Debug, Clone)]
pub struct ProcessPaymentEventCommand {
    /// Event type from the delivery envelope.
    pub event_type: PaymentEventType,

    /// Nested payment object; absent on non-payment deliveries.
    pub payment: Option<PaymentNotification>,
}

/// Result of webhook processing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessPaymentEventOutcome {
    /// Event acknowledged without action (wrong type or unsettled status).
    Ignored,

    /// Entitlement granted.
    Processed {
        user_id: UserId,
        subscription: SubscriptionTier,
        expires_at: Timestamp,
        /// Whether the audit row was written. The entitlement update
        /// stands either way; a failed audit insert is logged, not
        /// rolled back.
        audit_recorded: bool,
    },
}

/// Handler for the webhook reconciliation flow.
///
/// Resolves the paying customer to a local profile, classifies the
/// subscription tier, persists the entitlement, and appends an audit
/// record. Strictly linear, one pass per delivery, no retries and no
/// deduplication - a redelivered event reprocesses and produces a
/// duplicate audit row.
pub struct ProcessPaymentEventHandler {
    gateway: Arc<dyn PaymentGateway>,
    profiles: Arc<dyn ProfileStore>,
    rules: BillingRules,
}

impl ProcessPaymentEventHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        profiles: Arc<dyn ProfileStore>,
        rules: BillingRules,
    ) -> Self {
        Self {
            gateway,
            profiles,
            rules,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessPaymentEventCommand,
    ) -> Result<ProcessPaymentEventOutcome, BillingError> {
        // 1. Filter by event type. Everything but payment completion is a
        //    deliberate no-op, not an error.
        if !cmd.event_type.is_payment_completion() {
            tracing::debug!(event = cmd.event_type.as_str(), "ignoring non-payment event");
            return Ok(ProcessPaymentEventOutcome::Ignored);
        }

        let payment = cmd.payment.ok_or(BillingError::MissingPayment)?;

        // 2. Filter by settlement status.
        if !payment.status.is_settled() {
            tracing::debug!(
                payment_id = %payment.id,
                status = payment.status.as_str(),
                "ignoring unsettled payment"
            );
            return Ok(ProcessPaymentEventOutcome::Ignored);
        }

        // 3. Resolve the paying customer's email via the gateway.
        let customer = self
            .gateway
            .customer_by_reference(&payment.customer)
            .await
            .map_err(|e| BillingError::gateway(e.to_string(), e.status))?;

        let email = customer
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| BillingError::customer_email_missing(&payment.customer))?;

        // 4. Resolve the local main profile.
        let profile = self
            .profiles
            .find_main_by_email(&email)
            .await?
            .ok_or_else(|| BillingError::profile_not_found(&email))?;

        // 5-6. Classify the tier and compute the entitlement window.
        let subscription = self.rules.classify(payment.value, &payment.description);
        let entitlement = Entitlement::granted_now(subscription, self.rules.entitlement_days);

        // 7. Persist the entitlement. Failure here is terminal; nothing
        //    has been written yet.
        self.profiles
            .update_entitlement(&profile.user_id, &entitlement)
            .await?;

        tracing::info!(
            user_id = %profile.user_id,
            payment_id = %payment.id,
            subscription = %subscription,
            expires_at = %entitlement.expires_at,
            "subscription entitlement updated"
        );

        // 8. Append the audit record. The entitlement update already
        //    succeeded and must not be rolled back by an audit failure,
        //    so this error is logged and surfaced in the outcome only.
        let record = PaymentRecord::new(
            profile.user_id,
            payment.id.clone(),
            payment.value,
            self.rules.currency.clone(),
            payment.status.as_str(),
            subscription,
            payment.billing_type.clone(),
            entitlement.updated_at,
        );

        let audit_recorded = match self.profiles.insert_payment_record(&record).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    user_id = %profile.user_id,
                    payment_id = %payment.id,
                    error = %e,
                    "failed to store payment record"
                );
                false
            }
        };

        Ok(ProcessPaymentEventOutcome::Processed {
            user_id: profile.user_id,
            subscription,
            expires_at: entitlement.expires_at,
            audit_recorded,
        })
    }
}
