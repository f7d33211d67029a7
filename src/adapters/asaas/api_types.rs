//! Wire types for the ASAAS v3 REST API.
//!
//! Field names follow the provider's camelCase JSON; conversions into the
//! gateway port types live here so the adapter stays thin.

use serde::{Deserialize, Serialize};

use crate::ports::{GatewayCustomer, GatewayPayment};

/// Customer object as returned by `/api/v3/customers`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasCustomer {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cpf_cnpj: Option<String>,
    #[serde(default)]
    pub external_reference: Option<String>,
}

impl From<AsaasCustomer> for GatewayCustomer {
    fn from(c: AsaasCustomer) -> Self {
        GatewayCustomer {
            id: c.id,
            name: c.name,
            email: c.email,
            cpf_cnpj: c.cpf_cnpj,
            external_reference: c.external_reference,
        }
    }
}

/// Paginated list envelope used by the customer query endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasCustomerList {
    #[serde(default)]
    pub data: Vec<AsaasCustomer>,
}

/// Payment object as returned by `/api/v3/payments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasPayment {
    pub id: String,
    pub customer: String,
    pub status: String,
    pub value: f64,
    #[serde(default)]
    pub billing_type: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub invoice_url: Option<String>,
}

impl From<AsaasPayment> for GatewayPayment {
    fn from(p: AsaasPayment) -> Self {
        GatewayPayment {
            id: p.id,
            customer: p.customer,
            status: p.status,
            value: p.value,
            billing_type: p.billing_type,
            due_date: p.due_date,
            description: p.description,
            invoice_url: p.invoice_url,
        }
    }
}

/// Request body for customer registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerBody {
    pub name: String,
    pub email: String,
    pub cpf_cnpj: String,
    pub phone: String,
    pub mobile_phone: String,
    pub external_reference: String,
}

/// Request body for payment creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentBody {
    pub customer: String,
    pub billing_type: String,
    pub value: f64,
    pub due_date: String,
    pub external_reference: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}
