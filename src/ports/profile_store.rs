//! Profile store port for entitlement persistence.

use async_trait::async_trait;

use crate::domain::billing::{Entitlement, PaymentRecord, Profile};
use crate::domain::foundation::{DomainError, UserId};

/// Port for profile lookups and entitlement persistence.
///
/// All operations are single-row and non-transactional: the entitlement
/// update and the audit insert are independent calls with no atomicity
/// guarantee between them. The caller owns that tradeoff.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Point lookup of the main billing profile by email.
    ///
    /// Returns zero-or-one profile with the `main` role.
    async fn find_main_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError>;

    /// Updates the main profile's subscription fields for a user.
    ///
    /// Errors if no main profile row matches the user id.
    async fn update_entitlement(
        &self,
        user_id: &UserId,
        entitlement: &Entitlement,
    ) -> Result<(), DomainError>;

    /// Appends a payment audit record.
    async fn insert_payment_record(&self, record: &PaymentRecord) -> Result<(), DomainError>;
}
