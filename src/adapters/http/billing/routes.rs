//! Axum router configuration for billing endpoints.
//!
//! This module defines the route structure for billing-related API endpoints
//! and wires them to their corresponding handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    check_customer, create_customer, create_payment, get_payment_status, handle_asaas_webhook,
    BillingAppState,
};

/// Create the billing API router.
///
/// # Routes
///
/// - `POST /customers` - Register a customer with the payment gateway
/// - `POST /customers/check` - Look up a customer by email
/// - `POST /payments` - Create a payment
/// - `GET /payments/:id/status` - Poll a payment's current status
pub fn billing_routes() -> Router<BillingAppState> {
    Router::new()
        .route("/customers", post(create_customer))
        .route("/customers/check", post(check_customer))
        .route("/payments", post(create_payment))
        .route("/payments/:id/status", get(get_payment_status))
}

/// Create the webhook router.
///
/// Separate from the billing routes because webhook deliveries come from
/// the payment provider, not the front end, and answer in plain text.
///
/// # Routes
/// - `POST /asaas` - Handle ASAAS payment webhooks
pub fn webhook_routes() -> Router<BillingAppState> {
    Router::new().route("/asaas", post(handle_asaas_webhook))
}

/// Create the complete billing module router.
///
/// Combines billing and webhook routes into a single router suitable for
/// mounting at `/api`.
pub fn billing_router() -> Router<BillingAppState> {
    Router::new()
        .nest("/billing", billing_routes())
        .nest("/webhooks", webhook_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::billing::{BillingRules, Entitlement, PaymentRecord, Profile};
    use crate::domain::foundation::{DomainError, UserId};
    use crate::ports::{
        CreateCustomerRequest, CreatePaymentRequest, GatewayCustomer, GatewayError, GatewayPayment,
        PaymentGateway, ProfileStore,
    };
    use async_trait::async_trait;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    struct NoopGateway;

    #[async_trait]
    impl PaymentGateway for NoopGateway {
        async fn customer_by_reference(
            &self,
            _customer_id: &str,
        ) -> Result<GatewayCustomer, GatewayError> {
            Err(GatewayError::provider(404, "not found"))
        }

        async fn customer_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<GatewayCustomer>, GatewayError> {
            Ok(None)
        }

        async fn create_customer(
            &self,
            _request: CreateCustomerRequest,
        ) -> Result<GatewayCustomer, GatewayError> {
            Err(GatewayError::provider(401, "unauthorized"))
        }

        async fn create_payment(
            &self,
            _request: CreatePaymentRequest,
        ) -> Result<GatewayPayment, GatewayError> {
            Err(GatewayError::provider(401, "unauthorized"))
        }

        async fn payment_by_id(&self, _payment_id: &str) -> Result<GatewayPayment, GatewayError> {
            Err(GatewayError::provider(404, "not found"))
        }
    }

    struct NoopProfileStore;

    #[async_trait]
    impl ProfileStore for NoopProfileStore {
        async fn find_main_by_email(&self, _email: &str) -> Result<Option<Profile>, DomainError> {
            Ok(None)
        }

        async fn update_entitlement(
            &self,
            _user_id: &UserId,
            _entitlement: &Entitlement,
        ) -> Result<(), DomainError> {
            Ok(())
        }

        async fn insert_payment_record(&self, _record: &PaymentRecord) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn test_state() -> BillingAppState {
        BillingAppState {
            gateway: Arc::new(NoopGateway),
            profiles: Arc::new(NoopProfileStore),
            rules: BillingRules::default(),
            payment_callback_url: None,
        }
    }

    #[tokio::test]
    async fn webhook_route_answers_plain_ok() {
        let app = billing_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhooks/asaas")
                    .body(Body::from(r#"{"event": "SUBSCRIPTION_CREATED"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn check_customer_route_accepts_json() {
        let app = billing_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/billing/customers/check")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"email": "nobody@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn payment_status_route_proxies_upstream_not_found() {
        let app = billing_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/billing/payments/pay_1/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
