//! Domain layer - business rules and value objects, free of I/O.

pub mod billing;
pub mod foundation;
