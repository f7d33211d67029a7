//! Profile entity and entitlement value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, Timestamp, UserId};

use super::SubscriptionTier;

/// Role of the billing profile.
///
/// A user may have several viewing profiles; at most one per user carries
/// the `main` role, and only that one holds the subscription entitlement.
pub const MAIN_PROFILE_ROLE: &str = "main";

/// A user's billing/account profile.
///
/// Created by the registration flow (out of scope here); the
/// reconciliation flow only ever mutates the entitlement fields of the
/// main profile, and never deletes profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub profile_role: String,
    pub name: String,
    pub email: String,
    pub subscription: SubscriptionTier,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Profile {
    /// Returns true if this is the main billing profile.
    pub fn is_main(&self) -> bool {
        self.profile_role == MAIN_PROFILE_ROLE
    }

    /// Returns true if the profile holds an unexpired paid entitlement.
    pub fn has_active_subscription(&self, now: &Timestamp) -> bool {
        self.subscription.is_paid()
            && self
                .expires_at
                .map(|expires| expires.is_after(now))
                .unwrap_or(false)
    }

    /// Applies a granted entitlement to this profile.
    pub fn apply_entitlement(&mut self, entitlement: &Entitlement) {
        self.subscription = entitlement.subscription;
        self.expires_at = Some(entitlement.expires_at);
        self.updated_at = entitlement.updated_at;
    }
}

/// Subscription entitlement granted by a confirmed payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Tier granted.
    pub subscription: SubscriptionTier,

    /// When the entitlement lapses.
    pub expires_at: Timestamp,

    /// Bookkeeping timestamp for the update.
    pub updated_at: Timestamp,
}

impl Entitlement {
    /// Creates an entitlement starting now for the given tier and period.
    pub fn granted_now(subscription: SubscriptionTier, days: i64) -> Self {
        let now = Timestamp::now();
        Self {
            subscription,
            expires_at: now.add_days(days),
            updated_at: now,
        }
    }
}
