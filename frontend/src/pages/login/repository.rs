use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse, Role, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }

    /// Administrators and students read their profile from different endpoints.
    pub async fn fetch_profile(&self, role: Role) -> Result<User, ApiError> {
        match role {
            Role::Admin => self.client.get_admin_profile().await,
            Role::Student => self.client.get_student_profile().await,
        }
    }
}
