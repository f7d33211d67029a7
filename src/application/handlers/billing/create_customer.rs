//! CreateCustomerHandler - Command handler for registering a gateway customer.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::domain::foundation::Timestamp;
use crate::ports::{CreateCustomerRequest, GatewayCustomer, PaymentGateway};

/// Placeholder tax id used when the front end did not collect one.
const DEFAULT_CPF_CNPJ: &str = "00000000000";

/// Command to register a customer with the payment gateway.
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub name: String,
    pub email: String,
    pub cpf_cnpj: Option<String>,
    pub phone: Option<String>,
}

/// Handler for customer registration.
pub struct CreateCustomerHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateCustomerHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: CreateCustomerCommand,
    ) -> Result<GatewayCustomer, BillingError> {
        if cmd.name.trim().is_empty() {
            return Err(BillingError::validation("name", "Name is required"));
        }
        if cmd.email.trim().is_empty() {
            return Err(BillingError::validation("email", "Email is required"));
        }

        let request = CreateCustomerRequest {
            name: cmd.name,
            email: cmd.email,
            cpf_cnpj: cmd
                .cpf_cnpj
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CPF_CNPJ.to_string()),
            phone: cmd.phone,
            external_reference: format!("customer_{}", Timestamp::now().as_unix_millis()),
        };

        self.gateway
            .create_customer(request)
            .await
            .map_err(|e| BillingError::gateway(e.to_string(), e.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CreatePaymentRequest, GatewayError, GatewayPayment};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockGateway {
        requests: Mutex<Vec<CreateCustomerRequest>>,
    }

    impl MockGateway {
        fn new() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<CreateCustomerRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn customer_by_reference(
            &self,
            _customer_id: &str,
        ) -> Result<GatewayCustomer, GatewayError> {
            unimplemented!()
        }

        async fn customer_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<GatewayCustomer>, GatewayError> {
            unimplemented!()
        }

        async fn create_customer(
            &self,
            request: CreateCustomerRequest,
        ) -> Result<GatewayCustomer, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(GatewayCustomer {
                id: "cus_new".to_string(),
                name: Some(request.name),
                email: Some(request.email),
                cpf_cnpj: Some(request.cpf_cnpj),
                external_reference: Some(request.external_reference),
            })
        }

        async fn create_payment(
            &self,
            _request: CreatePaymentRequest,
        ) -> Result<GatewayPayment, GatewayError> {
            unimplemented!()
        }

        async fn payment_by_id(&self, _payment_id: &str) -> Result<GatewayPayment, GatewayError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn creates_customer_with_defaults() {
        let gateway = Arc::new(MockGateway::new());
        let handler = CreateCustomerHandler::new(gateway.clone());

        let customer = handler
            .handle(CreateCustomerCommand {
                name: "Viewer".to_string(),
                email: "viewer@example.com".to_string(),
                cpf_cnpj: None,
                phone: None,
            })
            .await
            .unwrap();

        assert_eq!(customer.id, "cus_new");
        let requests = gateway.requests();
        assert_eq!(requests[0].cpf_cnpj, DEFAULT_CPF_CNPJ);
        assert!(requests[0].external_reference.starts_with("customer_"));
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let handler = CreateCustomerHandler::new(Arc::new(MockGateway::new()));

        let result = handler
            .handle(CreateCustomerCommand {
                name: "  ".to_string(),
                email: "viewer@example.com".to_string(),
                cpf_cnpj: None,
                phone: None,
            })
            .await;

        assert!(matches!(result, Err(BillingError::Validation { .. })));
    }

    #[tokio::test]
    async fn rejects_empty_email() {
        let handler = CreateCustomerHandler::new(Arc::new(MockGateway::new()));

        let result = handler
            .handle(CreateCustomerCommand {
                name: "Viewer".to_string(),
                email: String::new(),
                cpf_cnpj: None,
                phone: None,
            })
            .await;

        assert!(matches!(result, Err(BillingError::Validation { .. })));
    }

    #[tokio::test]
    async fn supplied_tax_id_is_passed_through() {
        let gateway = Arc::new(MockGateway::new());
        let handler = CreateCustomerHandler::new(gateway.clone());

        handler
            .handle(CreateCustomerCommand {
                name: "Viewer".to_string(),
                email: "viewer@example.com".to_string(),
                cpf_cnpj: Some("12345678901".to_string()),
                phone: Some("+5511999999999".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(gateway.requests()[0].cpf_cnpj, "12345678901");
    }
}
