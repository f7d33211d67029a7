//! Billing-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | MissingPayment | 500 |
//! | Gateway | proxied upstream status, else 502 |
//! | CustomerEmailMissing | 500 |
//! | ProfileNotFound | 500 |
//! | Infrastructure | 500 |
//!
//! The webhook endpoint collapses everything to a plain 500 body; the
//! table above applies to the JSON billing endpoints.

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Errors raised by billing operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BillingError {
    /// Request field failed validation.
    #[error("Validation failed for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// A payment-completion event arrived without a payment object.
    #[error("Payment event has no payment object")]
    MissingPayment,

    /// The payment gateway rejected or failed a call.
    #[error("Payment gateway error: {reason}")]
    Gateway {
        reason: String,
        /// Upstream HTTP status, when the provider answered at all.
        upstream_status: Option<u16>,
    },

    /// The gateway customer record has no registered email.
    #[error("No email registered for gateway customer '{customer}'")]
    CustomerEmailMissing { customer: String },

    /// No main profile matches the resolved email.
    #[error("No main profile found for email '{email}'")]
    ProfileNotFound { email: String },

    /// Store or other infrastructure failure.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl BillingError {
    /// Creates a validation error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BillingError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a gateway error.
    pub fn gateway(reason: impl Into<String>, upstream_status: Option<u16>) -> Self {
        BillingError::Gateway {
            reason: reason.into(),
            upstream_status,
        }
    }

    /// Creates a missing-email error.
    pub fn customer_email_missing(customer: impl Into<String>) -> Self {
        BillingError::CustomerEmailMissing {
            customer: customer.into(),
        }
    }

    /// Creates a profile-not-found error.
    pub fn profile_not_found(email: impl Into<String>) -> Self {
        BillingError::ProfileNotFound {
            email: email.into(),
        }
    }
}

impl From<DomainError> for BillingError {
    fn from(err: DomainError) -> Self {
        BillingError::Infrastructure(err.to_string())
    }
}
