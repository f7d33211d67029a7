//! Billing domain module.
//!
//! Covers subscription entitlements, the payment webhook event model,
//! and the tier classification rules applied during reconciliation.
//!
//! # Module Structure
//!
//! - `tier` - SubscriptionTier levels and the BillingRules classifier
//! - `profile` - Profile entity and Entitlement value object
//! - `payment_record` - Append-only payment audit record
//! - `event` - Inbound webhook event model (ASAAS payment lifecycle)

mod errors;
mod event;
mod payment_record;
mod profile;
mod tier;

pub use errors::BillingError;
pub use event::{PaymentEventType, PaymentNotification, PaymentStatus};
pub use payment_record::PaymentRecord;
pub use profile::{Entitlement, Profile, MAIN_PROFILE_ROLE};
pub use tier::{BillingRules, SubscriptionTier};
