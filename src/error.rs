use crate::store::StoreError;

use lambda_http::{
    Body, Response,
    http::{HeaderValue, StatusCode, header},
};
use thiserror::Error;

/// Failure of a product request, mapped onto an HTTP status by [`ApiError::into_response`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed product does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request is missing a path parameter or carries an unusable body.
    #[error("{0}")]
    BadRequest(String),

    /// The path exists but does not accept the method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Storage or serialization fault.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render as a JSON `{"error": ...}` response. Internal details are not exposed.
    pub fn into_response(self) -> Response<Body> {
        let status = self.status();
        let message = match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        let body = serde_json::json!({ "error": message }).to_string();
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid JSON: {e}"))
    }
}
