//! Dramapay - Subscription billing backend for the drama streaming app.
//!
//! Receives payment lifecycle webhooks from the ASAAS gateway, reconciles
//! them against local user profiles, and grants subscription entitlements.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
