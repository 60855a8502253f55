use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert a reqwest transport failure into an AppError.
///
/// Only the error class is kept in the message; upstream URLs are logged,
/// not returned to the browser.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    tracing::warn!(error = %err, "Upstream request failed");
    if err.is_timeout() {
        AppError::upstream("The service took too long to respond. Please try again.")
    } else if err.is_connect() {
        AppError::upstream("Unable to reach the service. Please try again later.")
    } else {
        AppError::upstream(format!("Upstream request failed: {}", err.without_url()))
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
