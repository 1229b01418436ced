use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, EnrollmentsByProgram, OutstandingBalance, PaymentsSummary},
};

impl ApiClient {
    pub async fn enrollments_by_program_report(
        &self,
    ) -> Result<Vec<EnrollmentsByProgram>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/reports/enrollments-by-program", base_url)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn outstanding_balances_report(&self) -> Result<Vec<OutstandingBalance>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/reports/outstanding-balances", base_url)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn payments_summary_report(&self) -> Result<PaymentsSummary, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/reports/payments-summary", base_url)),
            )
            .await?;
        map_typed_response(response).await
    }
}
