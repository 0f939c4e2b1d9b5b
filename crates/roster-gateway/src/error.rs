// crates/roster-gateway/src/error.rs
//
// Pure mapping from an RPC failure to an HTTP status and JSON error body.
// No transport involved; the routes call `error_response` on every RPC
// failure so nothing is ever swallowed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tonic::{Code, Status};

/// HTTP status for an RPC failure kind. Unrecognized codes collapse to
/// 500 rather than leaking transport detail to the HTTP caller.
pub fn http_status(code: Code) -> StatusCode {
    match code {
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON error body. The `error` field is omitted when the message is
/// empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn from_message(message: &str) -> Self {
        Self {
            error: if message.is_empty() {
                None
            } else {
                Some(message.to_string())
            },
        }
    }
}

/// Render an RPC failure as the HTTP response the caller sees.
pub fn error_response(status: &Status) -> Response {
    (
        http_status(status.code()),
        Json(ErrorBody::from_message(status.message())),
    )
        .into_response()
}
