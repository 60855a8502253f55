use serde::{Deserialize, Serialize};

use crate::AppError;

/// Fallback message when a failure carries no usable text.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Uniform outcome of every outbound call to the backend or auth service.
///
/// `success == true` carries `data` (absent for void operations);
/// `success == false` always carries a non-empty `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ServiceResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Success with no payload (sign-out, 204 responses).
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    /// Failure with a message. Blank messages are replaced by [`GENERIC_FAILURE`].
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        };
        Self {
            success: false,
            data: None,
            message: Some(message),
        }
    }

    /// The failure message, or the generic fallback if a failed result
    /// arrived without one.
    pub fn error_message(&self) -> Option<&str> {
        if self.success {
            None
        } else {
            Some(self.message.as_deref().unwrap_or(GENERIC_FAILURE))
        }
    }

    /// Re-establish the failure invariant on results passed through from an
    /// upstream that set `success: false` without a message.
    pub fn normalized(mut self) -> Self {
        if !self.success && self.message.as_deref().map_or(true, |m| m.trim().is_empty()) {
            self.message = Some(GENERIC_FAILURE.to_string());
        }
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResult<U> {
        ServiceResult {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
        }
    }

    /// Convert into a `Result`, treating a failed call as an upstream error.
    pub fn into_result(self) -> Result<Option<T>, AppError> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self.message.unwrap_or_else(|| GENERIC_FAILURE.to_string());
            Err(AppError::upstream(message))
        }
    }
}
