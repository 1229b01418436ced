use super::utils::DeleteTarget;
use crate::api::{
    ApiClient, ApiError, Fee, FeePayload, Id, OutstandingBalance, Payment, PaymentStatus,
    PaymentsSummary, StudentFee,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct FeesRepository {
    client: Rc<ApiClient>,
}

impl Default for FeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FeesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_fees(&self) -> Result<Vec<Fee>, ApiError> {
        self.client.list_fees().await
    }

    pub async fn create_fee(&self, payload: FeePayload) -> Result<Fee, ApiError> {
        self.client.create_fee(payload).await
    }

    pub async fn deactivate_fee(&self, id: Id) -> Result<Fee, ApiError> {
        self.client.deactivate_fee(id).await
    }

    pub async fn fetch_student_fees(&self) -> Result<Vec<StudentFee>, ApiError> {
        self.client.list_student_fees().await
    }

    pub async fn fetch_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.client.list_payments().await
    }

    pub async fn update_payment_status(
        &self,
        id: Id,
        status: PaymentStatus,
    ) -> Result<Payment, ApiError> {
        self.client.update_payment_status(id, status).await
    }

    pub async fn delete(&self, target: DeleteTarget) -> Result<(), ApiError> {
        match target {
            DeleteTarget::Fee(id) => self.client.delete_fee(id).await,
            DeleteTarget::StudentFee(id) => self.client.delete_student_fee(id).await,
            DeleteTarget::Payment(id) => self.client.delete_payment(id).await,
        }
    }

    pub async fn fetch_outstanding(&self) -> Result<Vec<OutstandingBalance>, ApiError> {
        self.client.outstanding_balances_report().await
    }

    pub async fn fetch_summary(&self) -> Result<PaymentsSummary, ApiError> {
        self.client.payments_summary_report().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> FeesRepository {
        FeesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))))
    }

    #[tokio::test]
    async fn delete_targets_their_own_endpoints() {
        let server = MockServer::start_async().await;
        for path in ["/api/fees/1", "/api/student-fees/2", "/api/payments/3"] {
            server.mock(|when, then| {
                when.method(DELETE).path(path);
                then.status(204);
            });
        }
        let repo = repository(&server);
        repo.delete(DeleteTarget::Fee(1)).await.unwrap();
        repo.delete(DeleteTarget::StudentFee(2)).await.unwrap();
        repo.delete(DeleteTarget::Payment(3)).await.unwrap();
        assert_eq!(server.hits(DELETE, "/api/fees/1"), 1);
        assert_eq!(server.hits(DELETE, "/api/student-fees/2"), 1);
        assert_eq!(server.hits(DELETE, "/api/payments/3"), 1);
    }

    #[tokio::test]
    async fn summary_report_decodes_totals() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/reports/payments-summary");
            then.status(200).json_body(json!({
                "totalPaid": 1500.0, "totalBilled": 4000.0, "totalBalance": 2500.0
            }));
        });
        let summary = repository(&server).fetch_summary().await.unwrap();
        assert_eq!(summary.total_balance, 2500.0);
    }
}
