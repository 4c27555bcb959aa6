use crate::domain::model::ApiResponse;
use crate::utils::error::{ErrorCategory, LuckyError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{BoxError, Json};
use std::any::Any;
use std::time::Duration;
use tower::timeout::error::Elapsed;

impl IntoResponse for LuckyError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Timeout => {
                tracing::warn!(error = %self, "Rejected calculation request");
            }
            _ => {
                tracing::error!(
                    error = %self,
                    category = ?self.category(),
                    severity = ?self.severity(),
                    "Error calculating lucky numbers"
                );
            }
        }

        let body = ApiResponse::<()>::failure(self.user_friendly_message());
        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into the generic 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    LuckyError::InternalError {
        message: format!("handler panicked: {}", detail),
    }
    .into_response()
}

/// Answers errors raised by the tower middleware stack.
pub fn middleware_error(err: BoxError, request_timeout: Duration) -> LuckyError {
    if err.is::<Elapsed>() {
        LuckyError::RequestTimeout {
            millis: request_timeout.as_millis(),
        }
    } else {
        LuckyError::InternalError {
            message: format!("middleware failure: {}", err),
        }
    }
}
