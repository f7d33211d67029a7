//! ASAAS payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the ASAAS v3 API.
//! Every call is a single authenticated HTTPS request; the provider's
//! `access_token` header carries the API key.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AsaasConfig::new(api_key);
//! let gateway = AsaasGateway::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::{
    CreateCustomerRequest, CreatePaymentRequest, GatewayCustomer, GatewayError, GatewayPayment,
    PaymentGateway,
};

use super::api_types::{
    AsaasCustomer, AsaasCustomerList, AsaasPayment, CreateCustomerBody, CreatePaymentBody,
};

const ACCESS_TOKEN_HEADER: &str = "access_token";

/// ASAAS API configuration.
#[derive(Clone)]
pub struct AsaasConfig {
    /// ASAAS API key (`$aact_...`).
    api_key: SecretString,

    /// Base URL for the ASAAS API (default: https://www.asaas.com).
    base_url: String,
}

impl AsaasConfig {
    /// Create a new ASAAS configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: "https://www.asaas.com".to_string(),
        }
    }

    /// Set a custom API base URL (sandbox or testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// ASAAS payment gateway adapter.
pub struct AsaasGateway {
    config: AsaasConfig,
    http_client: reqwest::Client,
}

impl AsaasGateway {
    /// Create a new ASAAS gateway with the given configuration.
    pub fn new(config: AsaasConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v3{}", self.config.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http_client
            .get(self.url(path))
            .header(ACCESS_TOKEN_HEADER, self.config.api_key.expose_secret())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self
            .get(path)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        Self::decode(path, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let response = self
            .http_client
            .post(self.url(path))
            .header(ACCESS_TOKEN_HEADER, self.config.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            tracing::warn!(
                path,
                status = status.as_u16(),
                details,
                "ASAAS API returned non-success status"
            );
            return Err(GatewayError::provider(
                status.as_u16(),
                format!("ASAAS API error: {}", status),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::invalid_response(format!("Invalid ASAAS response: {}", e)))
    }
}

#[async_trait]
impl PaymentGateway for AsaasGateway {
    async fn customer_by_reference(
        &self,
        customer_id: &str,
    ) -> Result<GatewayCustomer, GatewayError> {
        let customer: AsaasCustomer = self
            .get_json(&format!("/customers/{}", customer_id))
            .await?;
        Ok(customer.into())
    }

    async fn customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<GatewayCustomer>, GatewayError> {
        let response = self
            .get("/customers")
            .query(&[("email", email)])
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let list: AsaasCustomerList = Self::decode("/customers", response).await?;
        Ok(list.data.into_iter().next().map(Into::into))
    }

    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<GatewayCustomer, GatewayError> {
        let phone = request.phone.unwrap_or_default();
        let body = CreateCustomerBody {
            name: request.name,
            email: request.email,
            cpf_cnpj: request.cpf_cnpj,
            phone: phone.clone(),
            mobile_phone: phone,
            external_reference: request.external_reference,
        };

        let customer: AsaasCustomer = self.post_json("/customers", &body).await?;
        tracing::info!(customer_id = %customer.id, "ASAAS customer created");
        Ok(customer.into())
    }

    async fn create_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<GatewayPayment, GatewayError> {
        let body = CreatePaymentBody {
            customer: request.customer,
            billing_type: request.billing_type,
            value: request.value,
            due_date: request.due_date,
            external_reference: request.external_reference,
            description: request.description,
            callback: request.callback_url,
        };

        let payment: AsaasPayment = self.post_json("/payments", &body).await?;
        tracing::info!(payment_id = %payment.id, "ASAAS payment created");
        Ok(payment.into())
    }

    async fn payment_by_id(&self, payment_id: &str) -> Result<GatewayPayment, GatewayError> {
        let payment: AsaasPayment = self.get_json(&format!("/payments/{}", payment_id)).await?;
        Ok(payment.into())
    }
}
