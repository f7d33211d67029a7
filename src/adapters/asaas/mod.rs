//! ASAAS payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the ASAAS v3 REST API.

mod api_types;
mod asaas_adapter;

pub use asaas_adapter::{AsaasConfig, AsaasGateway};
