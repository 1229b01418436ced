use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse, User},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(&request),
            )
            .await?;
        map_typed_response(response).await
    }

    /// Principal behind the current token. Used for administrators.
    pub async fn get_admin_profile(&self) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/auth/me", base_url)))
            .await?;
        map_typed_response(response).await
    }
}
