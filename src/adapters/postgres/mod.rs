//! PostgreSQL adapters for persistence ports.

mod profile_store;

pub use profile_store::PostgresProfileStore;
