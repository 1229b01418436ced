use crate::{
    api::{ApiClient, ApiError, ChangePasswordRequest},
    pages::login::repository::LoginRepository,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl Default for ProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Session helpers in `state::auth` take a login repository.
    pub fn session(&self) -> LoginRepository {
        LoginRepository::new_with_client(self.client.clone())
    }

    pub async fn change_password(&self, request: ChangePasswordRequest) -> Result<(), ApiError> {
        self.client.change_password(request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn change_password_sends_both_passwords() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/students/me/password");
            then.status(200).json_body(json!({ "message": "Password changed" }));
        });
        let repo = ProfileRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        repo.change_password(ChangePasswordRequest {
            current_password: "password".into(),
            new_password: "s3cret!".into(),
        })
        .await
        .unwrap();

        let body = server
            .last_request(PUT, "/api/students/me/password")
            .and_then(|request| request.json())
            .unwrap();
        assert_eq!(body["currentPassword"], "password");
        assert_eq!(body["newPassword"], "s3cret!");
    }

    #[tokio::test]
    async fn wrong_current_password_is_reported() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/students/me/password");
            then.status(400)
                .json_body(json!({ "message": "Current password is incorrect" }));
        });
        let repo = ProfileRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let err = repo
            .change_password(ChangePasswordRequest {
                current_password: "wrong".into(),
                new_password: "s3cret!".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Current password is incorrect");
        assert_eq!(err.status, Some(400));
    }
}
