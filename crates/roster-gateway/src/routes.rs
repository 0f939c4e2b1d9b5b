// crates/roster-gateway/src/routes.rs
//
// Route table and handlers. One route per RPC method:
//
//   POST /v1/users                  -> CreateUser
//   GET  /v1/users/:username        -> GetUser
//   POST /v1/users/:username/greet  -> GreetUser
//
// Bodies are read raw and decoded with serde_json so a malformed body
// short-circuits with 400 before any RPC call is issued. The caller's
// `authorization` header is forwarded verbatim as RPC metadata; the
// gateway holds no credential of its own, so an unauthenticated HTTP
// caller surfaces as 401 from the listener's auth guard.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tonic::Status;

use roster_rpc::messages::{CreateUserRequest, GetUserRequest, GreetUserRequest};

use crate::backend::RosterBackend;
use crate::error::error_response;

type SharedBackend = Arc<dyn RosterBackend>;

/// Build the gateway router over the given RPC backend.
pub fn router(backend: SharedBackend) -> Router {
    Router::new()
        .route("/v1/users", post(create_user))
        .route("/v1/users/:username", get(get_user))
        .route("/v1/users/:username/greet", post(greet_user))
        .with_state(backend)
}

/// Decode a JSON request body, mapping a parse failure to the
/// InvalidArgument HTTP rendering without touching the backend.
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, Response> {
    serde_json::from_slice(body).map_err(|e| {
        error_response(&Status::invalid_argument(format!(
            "invalid request body: {}",
            e
        )))
    })
}

/// The caller's bearer credential, forwarded verbatim.
fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

async fn create_user(
    State(backend): State<SharedBackend>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request: CreateUserRequest = match decode_body(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match backend.create_user(request, authorization(&headers)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(status) => error_response(&status),
    }
}

async fn get_user(
    State(backend): State<SharedBackend>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> Response {
    let request = GetUserRequest { username };

    match backend.get_user(request, authorization(&headers)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(status) => error_response(&status),
    }
}

async fn greet_user(
    State(backend): State<SharedBackend>,
    Path(username): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut request: GreetUserRequest = match decode_body(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    // The username rides in the path, grpc-gateway style.
    request.username = username;

    match backend.greet_user(request, authorization(&headers)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(status) => error_response(&status),
    }
}
