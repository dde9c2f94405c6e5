use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecowear_api::{AppResponse as ApiResponse, StatusCode as ApiStatusCode};
use serde::Serialize;

/// Backend wrapper for ecowear-api's AppResponse that adds Axum integration.
///
/// Only the payload is serialized: clients receive the bare JSON body, the
/// status travels as the HTTP status line.
///
/// # Examples
///
/// ```rust,ignore
/// AppResponse::ok(rewards)
/// AppResponse::created(auth_response)
/// ```
pub struct AppResponse<T> {
    inner: ApiResponse<T>,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// Creates a new response wrapping the API response
    pub fn new(inner: ApiResponse<T>) -> Self {
        Self { inner }
    }

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(ApiResponse::ok(data))
    }

    /// 201 Created with data
    pub fn created(data: T) -> Self {
        Self::new(ApiResponse::created(data))
    }
}

/// Converts API StatusCode to Axum's StatusCode
fn convert_status(api_status: ApiStatusCode) -> StatusCode {
    match api_status {
        ApiStatusCode::Ok => StatusCode::OK,
        ApiStatusCode::Created => StatusCode::CREATED,
        ApiStatusCode::NoContent => StatusCode::NO_CONTENT,
    }
}

impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status = convert_status(self.inner.status);
        match self.inner.data {
            Some(data) => (status, Json(data)).into_response(),
            None => status.into_response(),
        }
    }
}
