use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, Id, Payment, PaymentPayload, PaymentStatus},
};

impl ApiClient {
    pub async fn list_payments(&self) -> Result<Vec<Payment>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/payments", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_payments_by_student(&self, student_id: Id) -> Result<Vec<Payment>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/payments/student/{}",
                base_url, student_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_my_payments(&self) -> Result<Vec<Payment>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/payments/my-payments", base_url)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_payment(&self, payload: PaymentPayload) -> Result<Payment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/payments", base_url))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_payment_status(
        &self,
        id: Id,
        status: PaymentStatus,
    ) -> Result<Payment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/payments/{}/status", base_url, id))
                    .query(&[("status", status.as_str())]),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_payment(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!("{}/payments/{}", base_url, id)))
            .await?;
        map_empty_response(response).await
    }

    pub async fn get_total_paid(&self, student_id: Id) -> Result<f64, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/payments/student/{}/total-paid",
                base_url, student_id
            )))
            .await?;
        map_typed_response(response).await
    }
}
