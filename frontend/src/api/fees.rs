use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, Fee, FeePayload, FeeStatus, Id, StudentFee},
};

impl ApiClient {
    pub async fn list_fees(&self) -> Result<Vec<Fee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/fees", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_active_fees(&self) -> Result<Vec<Fee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/fees/active", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn get_fee(&self, id: Id) -> Result<Fee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/fees/{}", base_url, id)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_fee(&self, payload: FeePayload) -> Result<Fee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/fees", base_url))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_fee(&self, id: Id, payload: FeePayload) -> Result<Fee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/fees/{}", base_url, id))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn deactivate_fee(&self, id: Id) -> Result<Fee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/fees/{}/deactivate", base_url, id)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_fee(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!("{}/fees/{}", base_url, id)))
            .await?;
        map_empty_response(response).await
    }

    pub async fn list_student_fees(&self) -> Result<Vec<StudentFee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/student-fees", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_student_fees_by_student(
        &self,
        student_id: Id,
    ) -> Result<Vec<StudentFee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/student-fees/student/{}",
                base_url, student_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_my_fees(&self) -> Result<Vec<StudentFee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/student-fees/my-fees", base_url)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_overdue_student_fees(&self) -> Result<Vec<StudentFee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/student-fees/overdue", base_url)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_student_fee(&self, payload: StudentFee) -> Result<StudentFee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/student-fees", base_url))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_student_fee(
        &self,
        id: Id,
        payload: StudentFee,
    ) -> Result<StudentFee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/student-fees/{}", base_url, id))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_student_fee_status(
        &self,
        id: Id,
        status: FeeStatus,
    ) -> Result<StudentFee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/student-fees/{}/status", base_url, id))
                    .query(&[("status", status.as_str())]),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_student_fee(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/student-fees/{}", base_url, id)),
            )
            .await?;
        map_empty_response(response).await
    }

    pub async fn get_outstanding_amount(&self, student_id: Id) -> Result<f64, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/student-fees/student/{}/outstanding",
                base_url, student_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn get_paid_amount(&self, student_id: Id) -> Result<f64, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/student-fees/student/{}/paid",
                base_url, student_id
            )))
            .await?;
        map_typed_response(response).await
    }
}
