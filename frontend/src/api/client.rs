use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::ApiError,
    config,
    utils::{navigation, storage},
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn bearer_token() -> Option<String> {
        match storage::get_item(storage::TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }

    /// Attaches the bearer token when one is stored and sends the request.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = match Self::bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let method = request.method().clone();
        let url = request.url().to_string();
        match self.dispatch(request).await {
            Ok(response) => {
                if !response.status().is_success() {
                    log::warn!("{} {} -> {}", method, url, response.status());
                }
                Ok(response)
            }
            Err(err) => {
                log::warn!("{} {} failed: {}", method, url, err);
                Err(err)
            }
        }
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        match mock::find_mock(request.url().as_str()) {
            Some(responder) => responder.respond(&request)?.into_response(),
            None => Err(ApiError::request_failed(format!(
                "Request failed: no mock registered for {}",
                request.url()
            ))),
        }
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::info!("Session rejected by the server; signing out");
            storage::clear_session();
            navigation::redirect_to_login_if_needed();
        }
    }
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    ApiClient::handle_unauthorized_status(status);
    let body = read_body(response).await?;
    if status.is_success() {
        decode_success_body(&body)
    } else {
        Err(error_from_body(status, &body))
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    ApiClient::handle_unauthorized_status(status);
    if status.is_success() {
        Ok(())
    } else {
        let body = read_body(response).await?;
        Err(error_from_body(status, &body))
    }
}

/// Binary endpoints report failures with a fixed message instead of the body.
pub(crate) async fn map_binary_response(
    response: Response,
    failure_message: &str,
) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    ApiClient::handle_unauthorized_status(status);
    if !status.is_success() {
        return Err(ApiError::http(status.as_u16(), failure_message));
    }
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    response
        .text()
        .await
        .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))
}

pub(crate) fn decode_success_body<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let trimmed = body.trim();
    let value = if trimmed.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(body.to_string()))
    };
    serde_json::from_value(value).map_err(|e| {
        log::error!("Failed to parse response: {}", e);
        ApiError::unknown(format!("Failed to parse response: {}", e))
    })
}

pub(crate) fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    let code = status.as_u16();
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return ApiError::http(code, format!("HTTP {}", code));
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            let message = ["message", "error"]
                .iter()
                .filter_map(|key| map.get(*key).and_then(Value::as_str))
                .find(|msg| !msg.trim().is_empty())
                .unwrap_or("An error occurred")
                .to_string();
            ApiError::http(code, message).with_details(Value::Object(map))
        }
        Ok(Value::String(message)) => ApiError::http(code, message),
        _ => ApiError::http(code, trimmed),
    }
}

/// Path segment escaping for identifiers typed by users.
pub(crate) fn encode_segment(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, percent_encoding::NON_ALPHANUMERIC).to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock::{register_mock, MockResponse, TestResponder};
