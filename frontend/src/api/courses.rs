use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, Course, CoursePayload, Id, Unit, UnitPayload},
};

impl ApiClient {
    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/courses", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn get_course(&self, id: Id) -> Result<Course, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/courses/{}", base_url, id)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_course(&self, payload: CoursePayload) -> Result<Course, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/courses", base_url))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_course(&self, id: Id, payload: CoursePayload) -> Result<Course, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/courses/{}", base_url, id))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_course(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!("{}/courses/{}", base_url, id)))
            .await?;
        map_empty_response(response).await
    }

    pub async fn list_units(&self) -> Result<Vec<Unit>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/units", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn get_unit(&self, id: Id) -> Result<Unit, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/units/{}", base_url, id)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_unit(&self, course_id: Id, payload: UnitPayload) -> Result<Unit, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/units", base_url))
                    .query(&[("courseId", course_id)])
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_unit(
        &self,
        id: Id,
        course_id: Id,
        payload: UnitPayload,
    ) -> Result<Unit, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/units/{}", base_url, id))
                    .query(&[("courseId", course_id)])
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_unit(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!("{}/units/{}", base_url, id)))
            .await?;
        map_empty_response(response).await
    }
}
