//! Subscription tier definitions and classification rules.

use serde::{Deserialize, Serialize};

/// Subscription tier granted to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// No active subscription.
    None,

    /// Basic tier - standard catalog access.
    Basic,

    /// Premium tier - full catalog, granted by value or plan name.
    Premium,
}

impl SubscriptionTier {
    /// Returns true if this tier grants any paid access.
    pub fn is_paid(&self) -> bool {
        !matches!(self, SubscriptionTier::None)
    }

    /// Returns the storage/wire name for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::None => "none",
            SubscriptionTier::Basic => "basic",
            SubscriptionTier::Premium => "premium",
        }
    }

    /// Parses a tier from its storage name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(SubscriptionTier::None),
            "basic" => Some(SubscriptionTier::Basic),
            "premium" => Some(SubscriptionTier::Premium),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Business rules applied when reconciling a confirmed payment.
///
/// The threshold and entitlement period are configuration, not derived
/// logic; defaults match the production plans (premium from R$14.90,
/// 30-day entitlement, BRL billing).
#[derive(Debug, Clone, PartialEq)]
pub struct BillingRules {
    /// Payments at or above this value classify as premium.
    pub premium_threshold: f64,

    /// Days of entitlement granted per confirmed payment.
    pub entitlement_days: i64,

    /// Currency recorded on payment audit rows.
    pub currency: String,
}

impl BillingRules {
    /// Classifies the tier a payment grants.
    ///
    /// Premium when the value meets the threshold or the description
    /// names a premium plan (case-insensitive); basic otherwise.
    pub fn classify(&self, value: f64, description: &str) -> SubscriptionTier {
        if value >= self.premium_threshold || description.to_lowercase().contains("premium") {
            SubscriptionTier::Premium
        } else {
            SubscriptionTier::Basic
        }
    }
}

impl Default for BillingRules {
    fn default() -> Self {
        Self {
            premium_threshold: 14.90,
            entitlement_days: 30,
            currency: "BRL".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn none_tier_is_not_paid() {
        assert!(!SubscriptionTier::None.is_paid());
    }

    #[test]
    fn basic_and_premium_are_paid() {
        assert!(SubscriptionTier::Basic.is_paid());
        assert!(SubscriptionTier::Premium.is_paid());
    }

    #[test]
    fn tier_roundtrips_through_storage_name() {
        for tier in [
            SubscriptionTier::None,
            SubscriptionTier::Basic,
            SubscriptionTier::Premium,
        ] {
            assert_eq!(SubscriptionTier::parse(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn unknown_tier_name_fails_to_parse() {
        assert_eq!(SubscriptionTier::parse("gold"), None);
    }

    #[test]
    fn value_at_threshold_classifies_premium() {
        let rules = BillingRules::default();
        assert_eq!(
            rules.classify(14.90, "Monthly plan"),
            SubscriptionTier::Premium
        );
    }

    #[test]
    fn value_below_threshold_classifies_basic() {
        let rules = BillingRules::default();
        assert_eq!(rules.classify(9.90, "Monthly plan"), SubscriptionTier::Basic);
    }

    #[test]
    fn premium_description_overrides_low_value() {
        let rules = BillingRules::default();
        assert_eq!(
            rules.classify(5.00, "Premium Plan"),
            SubscriptionTier::Premium
        );
    }

    #[test]
    fn description_match_is_case_insensitive() {
        let rules = BillingRules::default();
        assert_eq!(
            rules.classify(5.00, "upgrade to PREMIUM"),
            SubscriptionTier::Premium
        );
    }

    proptest! {
        #[test]
        fn values_at_or_above_threshold_always_premium(value in 14.90f64..10_000.0) {
            let rules = BillingRules::default();
            prop_assert_eq!(rules.classify(value, ""), SubscriptionTier::Premium);
        }

        #[test]
        fn low_values_without_premium_text_always_basic(value in 0.0f64..14.899) {
            let rules = BillingRules::default();
            prop_assert_eq!(
                rules.classify(value, "Monthly subscription"),
                SubscriptionTier::Basic
            );
        }
    }
}
