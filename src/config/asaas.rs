//! ASAAS gateway configuration

use serde::Deserialize;

use super::error::ValidationError;

/// ASAAS payment gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AsaasConfigSection {
    /// ASAAS API key
    pub api_key: String,

    /// ASAAS API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Callback URL stamped onto created payments so the gateway can
    /// deliver webhooks back to this service
    pub webhook_callback_url: Option<String>,
}

impl AsaasConfigSection {
    /// Check if pointed at the ASAAS sandbox
    pub fn is_sandbox(&self) -> bool {
        self.base_url.contains("sandbox")
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("ASAAS_API_KEY"));
        }

        // ASAAS keys carry this prefix in both sandbox and production
        if !self.api_key.starts_with("$aact_") {
            return Err(ValidationError::InvalidAsaasKey);
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAsaasBaseUrl);
        }

        Ok(())
    }
}

impl Default for AsaasConfigSection {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            webhook_callback_url: None,
        }
    }
}

fn default_base_url() -> String {
    "https://www.asaas.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = AsaasConfigSection::default();
        assert_eq!(config.base_url, "https://www.asaas.com");
        assert!(!config.is_sandbox());
    }

    #[test]
    fn test_is_sandbox() {
        let config = AsaasConfigSection {
            base_url: "https://sandbox.asaas.com".to_string(),
            ..Default::default()
        };
        assert!(config.is_sandbox());
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = AsaasConfigSection::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_key_prefix() {
        let config = AsaasConfigSection {
            api_key: "sk_test_xxx".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let config = AsaasConfigSection {
            api_key: "$aact_test_xxx".to_string(),
            base_url: "asaas.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = AsaasConfigSection {
            api_key: "$aact_test_xxx".to_string(),
            base_url: "https://sandbox.asaas.com".to_string(),
            webhook_callback_url: Some("https://api.example.com/api/webhooks/asaas".to_string()),
        };
        assert!(config.validate().is_ok());
    }
}
