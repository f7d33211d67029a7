//! PostgreSQL implementation of the ProfileStore port.
//!
//! Backs the `profiles` and `payment_records` tables. All operations are
//! single-row; the entitlement update and the audit insert are independent
//! statements with no shared transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::billing::{
    Entitlement, PaymentRecord, Profile, SubscriptionTier, MAIN_PROFILE_ROLE,
};
use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Timestamp, UserId};
use crate::ports::ProfileStore;

/// PostgreSQL implementation of the ProfileStore port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    /// Creates a new PostgresProfileStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a profile.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Uuid,
    profile_role: String,
    name: String,
    email: String,
    subscription: String,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let subscription = SubscriptionTier::parse(&row.subscription).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid subscription value: {}", row.subscription),
            )
        })?;

        Ok(Profile {
            id: ProfileId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            profile_role: row.profile_role,
            name: row.name,
            email: row.email,
            subscription,
            expires_at: row.expires_at.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn find_main_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, user_id, profile_role, name, email, subscription,
                   expires_at, created_at, updated_at
            FROM profiles
            WHERE email = $1 AND profile_role = $2
            "#,
        )
        .bind(email)
        .bind(MAIN_PROFILE_ROLE)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load profile: {}", e)))?;

        row.map(Profile::try_from).transpose()
    }

    async fn update_entitlement(
        &self,
        user_id: &UserId,
        entitlement: &Entitlement,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET subscription = $1, expires_at = $2, updated_at = $3
            WHERE user_id = $4 AND profile_role = $5
            "#,
        )
        .bind(entitlement.subscription.as_str())
        .bind(entitlement.expires_at.as_datetime())
        .bind(entitlement.updated_at.as_datetime())
        .bind(user_id.as_uuid())
        .bind(MAIN_PROFILE_ROLE)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update entitlement: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("No main profile for user {}", user_id),
            ));
        }

        Ok(())
    }

    async fn insert_payment_record(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payment_records
                (id, user_id, payment_id, amount, currency, status,
                 subscription_type, payment_method, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.user_id.as_uuid())
        .bind(&record.payment_id)
        .bind(record.amount)
        .bind(&record.currency)
        .bind(&record.status)
        .bind(record.subscription_type.as_str())
        .bind(&record.payment_method)
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert payment record: {}", e)))?;

        Ok(())
    }
}
