//! Billing rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::billing::BillingRules;

/// Billing classification settings
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Payments at or above this value grant the premium tier
    #[serde(default = "default_premium_threshold")]
    pub premium_threshold: f64,

    /// Days of access granted per confirmed payment
    #[serde(default = "default_entitlement_days")]
    pub entitlement_days: i64,

    /// Currency recorded against payment records
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl BillingConfig {
    /// Convert into the domain rules used by the payment event handler
    pub fn to_rules(&self) -> BillingRules {
        BillingRules {
            premium_threshold: self.premium_threshold,
            entitlement_days: self.entitlement_days,
            currency: self.currency.clone(),
        }
    }

    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.premium_threshold <= 0.0 {
            return Err(ValidationError::InvalidPremiumThreshold);
        }
        if self.entitlement_days <= 0 {
            return Err(ValidationError::InvalidEntitlementDays);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            premium_threshold: default_premium_threshold(),
            entitlement_days: default_entitlement_days(),
            currency: default_currency(),
        }
    }
}

fn default_premium_threshold() -> f64 {
    14.90
}

fn default_entitlement_days() -> i64 {
    30
}

fn default_currency() -> String {
    "BRL".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_config_defaults() {
        let config = BillingConfig::default();
        assert_eq!(config.premium_threshold, 14.90);
        assert_eq!(config.entitlement_days, 30);
        assert_eq!(config.currency, "BRL");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_rules() {
        let config = BillingConfig {
            premium_threshold: 24.90,
            entitlement_days: 90,
            currency: "USD".to_string(),
        };
        let rules = config.to_rules();
        assert_eq!(rules.premium_threshold, 24.90);
        assert_eq!(rules.entitlement_days, 90);
        assert_eq!(rules.currency, "USD");
    }

    #[test]
    fn test_validation_negative_threshold() {
        let config = BillingConfig {
            premium_threshold: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_entitlement_days() {
        let config = BillingConfig {
            entitlement_days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_currency() {
        let config = BillingConfig {
            currency: "real".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
