//! Append-only payment audit record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentRecordId, Timestamp, UserId};

use super::SubscriptionTier;

/// Immutable audit row capturing one processed payment event.
///
/// Created once per successfully reconciled webhook delivery; never
/// mutated or deleted. Provider payment ids are deliberately not unique
/// here - a redelivered event produces a second row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentRecordId,
    pub user_id: UserId,

    /// Provider-assigned payment identifier.
    pub payment_id: String,

    pub amount: f64,
    pub currency: String,

    /// Provider status string at processing time (e.g. `CONFIRMED`).
    pub status: String,

    /// Tier the payment was classified into.
    pub subscription_type: SubscriptionTier,

    /// Provider billing type (e.g. `CREDIT_CARD`, `PIX`).
    pub payment_method: String,

    pub created_at: Timestamp,
}

impl PaymentRecord {
    /// Creates a new audit record for a reconciled payment.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        payment_id: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        status: impl Into<String>,
        subscription_type: SubscriptionTier,
        payment_method: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: PaymentRecordId::new(),
            user_id,
            payment_id: payment_id.into(),
            amount,
            currency: currency.into(),
            status: status.into(),
            subscription_type,
            payment_method: payment_method.into(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_gets_fresh_id() {
        let user_id = UserId::new();
        let a = PaymentRecord::new(
            user_id,
            "pay_1",
            19.90,
            "BRL",
            "CONFIRMED",
            SubscriptionTier::Premium,
            "CREDIT_CARD",
            Timestamp::now(),
        );
        let b = PaymentRecord::new(
            user_id,
            "pay_1",
            19.90,
            "BRL",
            "CONFIRMED",
            SubscriptionTier::Premium,
            "CREDIT_CARD",
            Timestamp::now(),
        );

        // Same provider payment, distinct audit rows.
        assert_ne!(a.id, b.id);
        assert_eq!(a.payment_id, b.payment_id);
    }
}
