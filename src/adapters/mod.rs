//! Adapters - Implementations of the ports against real infrastructure.

pub mod asaas;
pub mod http;
pub mod postgres;
