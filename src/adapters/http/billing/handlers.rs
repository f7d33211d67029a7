//! HTTP handlers for billing endpoints.
//!
//! These handlers connect axum routes to the application layer handlers.
//! The webhook endpoint speaks the exact plain-text protocol the payment
//! provider expects; the remaining endpoints are JSON.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::billing::{
    CheckCustomerHandler, CheckCustomerQuery, CreateCustomerCommand, CreateCustomerHandler,
    CreatePaymentCommand, CreatePaymentHandler, GetPaymentStatusHandler, GetPaymentStatusQuery,
    ProcessPaymentEventCommand, ProcessPaymentEventHandler,
};
use crate::domain::billing::{BillingError, BillingRules, PaymentEventType};
use crate::ports::{PaymentGateway, ProfileStore};

use super::dto::{
    CheckCustomerRequestDto, CheckCustomerResponse, CreateCustomerRequestDto,
    CreatePaymentRequestDto, CustomerResponse, ErrorResponse, PaymentResponse, WebhookEventDto,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all billing dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct BillingAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub profiles: Arc<dyn ProfileStore>,
    pub rules: BillingRules,

    /// Webhook callback URL stamped onto created payments.
    pub payment_callback_url: Option<String>,
}

impl BillingAppState {
    /// Create handlers on demand from the shared state.
    pub fn process_payment_event_handler(&self) -> ProcessPaymentEventHandler {
        ProcessPaymentEventHandler::new(
            self.gateway.clone(),
            self.profiles.clone(),
            self.rules.clone(),
        )
    }

    pub fn create_customer_handler(&self) -> CreateCustomerHandler {
        CreateCustomerHandler::new(self.gateway.clone())
    }

    pub fn check_customer_handler(&self) -> CheckCustomerHandler {
        CheckCustomerHandler::new(self.gateway.clone())
    }

    pub fn create_payment_handler(&self) -> CreatePaymentHandler {
        CreatePaymentHandler::new(self.gateway.clone(), self.payment_callback_url.clone())
    }

    pub fn get_payment_status_handler(&self) -> GetPaymentStatusHandler {
        GetPaymentStatusHandler::new(self.gateway.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Webhook Endpoint
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhooks/asaas - Handle ASAAS payment webhooks.
///
/// The provider expects `200 OK` with body `"OK"` for both no-op and
/// success paths, and `500` with body `"Internal Server Error"` on any
/// failure. Malformed payloads count as failures, not bad requests.
pub async fn handle_asaas_webhook(State(state): State<BillingAppState>, body: Bytes) -> Response {
    let dto: WebhookEventDto = match serde_json::from_slice(&body) {
        Ok(dto) => dto,
        Err(e) => {
            tracing::warn!(error = %e, "malformed webhook payload");
            return webhook_failure();
        }
    };

    let cmd = ProcessPaymentEventCommand {
        event_type: PaymentEventType::from(dto.event),
        payment: dto.payment,
    };

    match state.process_payment_event_handler().handle(cmd).await {
        Ok(_) => (StatusCode::OK, "OK").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "webhook processing failed");
            webhook_failure()
        }
    }
}

fn webhook_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Billing Endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/billing/customers - Register a gateway customer.
pub async fn create_customer(
    State(state): State<BillingAppState>,
    Json(request): Json<CreateCustomerRequestDto>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.create_customer_handler();
    let customer = handler
        .handle(CreateCustomerCommand {
            name: request.name,
            email: request.email,
            cpf_cnpj: request.cpf_cnpj,
            phone: request.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

/// POST /api/billing/customers/check - Look up a customer by email.
pub async fn check_customer(
    State(state): State<BillingAppState>,
    Json(request): Json<CheckCustomerRequestDto>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.check_customer_handler();
    let customer = handler
        .handle(CheckCustomerQuery {
            email: request.email,
        })
        .await?;

    let response = CheckCustomerResponse {
        exists: customer.is_some(),
        customer: customer.map(CustomerResponse::from),
    };
    Ok(Json(response))
}

/// POST /api/billing/payments - Create a payment.
pub async fn create_payment(
    State(state): State<BillingAppState>,
    Json(request): Json<CreatePaymentRequestDto>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.create_payment_handler();
    let payment = handler
        .handle(CreatePaymentCommand {
            customer: request.customer,
            billing_type: request.billing_type,
            value: request.value,
            due_date: request.due_date,
            external_reference: request.external_reference,
            description: request.description,
            callback: request.callback,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PaymentResponse::from(payment))))
}

/// GET /api/billing/payments/{id}/status - Poll a payment's status.
pub async fn get_payment_status(
    State(state): State<BillingAppState>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.get_payment_status_handler();
    let payment = handler.handle(GetPaymentStatusQuery { payment_id }).await?;

    Ok(Json(PaymentResponse::from(payment)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts billing errors to HTTP responses.
pub struct BillingApiError(BillingError);

impl From<BillingError> for BillingApiError {
    fn from(err: BillingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for BillingApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BillingError::Validation { .. } => StatusCode::BAD_REQUEST,
            BillingError::Gateway {
                upstream_status, ..
            } => upstream_status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            BillingError::MissingPayment
            | BillingError::CustomerEmailMissing { .. }
            | BillingError::ProfileNotFound { .. }
            | BillingError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut body = ErrorResponse::new(self.0.to_string());
        if let BillingError::Gateway {
            upstream_status: Some(upstream),
            ..
        } = &self.0
        {
            body = body.with_details(format!("upstream status {}", upstream));
        }

        (status, Json(body)).into_response()
    }
}
