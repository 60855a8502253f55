use std::time::Duration;

use reqwest::header::SET_COOKIE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_types::ServiceResult;

use crate::auth::cookies::Credentials;
use crate::error_convert::ReqwestErrorExt;

const USER_AGENT: &str = concat!("tutorhub-server/", env!("CARGO_PKG_VERSION"));

/// Outcome of one upstream call, with any `Set-Cookie` values the upstream
/// sent so they can be relayed to the browser.
#[derive(Debug, Clone)]
pub struct Upstream<T> {
    pub result: ServiceResult<T>,
    pub set_cookies: Vec<String>,
}

impl<T> Upstream<T> {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            result: ServiceResult::failure(message),
            set_cookies: Vec::new(),
        }
    }
}

/// HTTP client bound to one upstream base URL (the backend API or the auth
/// service). Cheap to clone; the connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Join a path onto the base URL with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Perform exactly one request and normalize the outcome.
    ///
    /// Never returns an error: transport failures, non-2xx statuses and
    /// unreadable bodies all become `success: false` results. `operation` is
    /// the human phrase used in fallback messages, e.g. "fetch categories".
    #[tracing::instrument(skip(self, body, credentials), fields(base = %self.base_url))]
    pub async fn request<T, B>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: Option<&B>,
        credentials: &Credentials,
    ) -> Upstream<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = credentials.apply(self.http.request(method, self.url(path)));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return Upstream::failed(e.into_app_error().message),
        };

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Upstream::failed(e.into_app_error().message),
        };

        let result = normalize_body(operation, status, &bytes);
        if let Some(message) = result.error_message() {
            tracing::warn!(operation, %status, error = message, "Upstream call failed");
        }

        Upstream { result, set_cookies }
    }

    /// [`ApiClient::request`] without the cookie side channel.
    pub async fn call<T, B>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: Option<&B>,
        credentials: &Credentials,
    ) -> ServiceResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(operation, method, path, body, credentials)
            .await
            .result
    }
}

/// Map an upstream status and raw body onto a [`ServiceResult`].
///
/// - non-2xx: the body's `message` (or `error.message`), else
///   `"Failed to <operation>: <status>"`
/// - 2xx with an empty body: success without data
/// - 2xx object with a boolean `success`: passed through as-is
/// - any other 2xx JSON: wrapped as the success payload
pub fn normalize_body<T: DeserializeOwned>(
    operation: &str,
    status: StatusCode,
    body: &[u8],
) -> ServiceResult<T> {
    if !status.is_success() {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| body_message(&v))
            .unwrap_or_else(|| format!("Failed to {operation}: {status}"));
        return ServiceResult::failure(message);
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return ServiceResult::ok_empty();
    }

    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return ServiceResult::failure(format!("Failed to {operation}: invalid response ({e})"))
        }
    };

    if value.get("success").is_some_and(Value::is_boolean) {
        return match serde_json::from_value::<ServiceResult<T>>(value) {
            Ok(result) => result.normalized(),
            Err(e) => ServiceResult::failure(format!("Failed to {operation}: invalid response ({e})")),
        };
    }

    match serde_json::from_value::<T>(value) {
        Ok(data) => ServiceResult::ok(data),
        Err(e) => ServiceResult::failure(format!("Failed to {operation}: invalid response ({e})")),
    }
}

fn body_message(value: &Value) -> Option<String> {
    let candidates = [
        value.get("message"),
        value.get("error").and_then(|e| e.get("message")),
        value.get("error"),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}
