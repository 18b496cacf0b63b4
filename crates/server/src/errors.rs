use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const VALIDATION_ERRORS: &str = "validation errors";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Failure of a single request.
///
/// `NotFound` renders as 404 `{"error": "..."}`; `BadRequest` renders as
/// 400 `{"errors": [...]}`. The two shapes never mix.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(Vec<String>),
}

impl ApiError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn restaurant_not_found() -> Self { Self::not_found("Restaurant") }

    pub fn validation() -> Self { Self::BadRequest(vec![VALIDATION_ERRORS.to_string()]) }

    pub fn unexpected() -> Self { Self::BadRequest(vec![UNEXPECTED_ERROR.to_string()]) }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            warn!(err = %e, "request rejected by validation");
            return ApiError::validation();
        }
        match e {
            ServiceError::Reference(msg) => ApiError::BadRequest(vec![msg]),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            other => {
                error!(err = %other, "unexpected service error");
                ApiError::unexpected()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": msg}))).into_response()
            }
            ApiError::BadRequest(msgs) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({"errors": msgs}))).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_documented_shapes() {
        let e: ApiError = ServiceError::Model(ModelError::Validation("price".into())).into();
        assert!(matches!(e, ApiError::BadRequest(ref m) if m == &vec![VALIDATION_ERRORS.to_string()]));

        let e: ApiError = ServiceError::reference().into();
        assert!(matches!(e, ApiError::BadRequest(ref m) if m == &vec!["Restaurant or Pizza not found".to_string()]));

        let e: ApiError = ServiceError::Db("disk full".into()).into();
        assert!(matches!(e, ApiError::BadRequest(ref m) if m == &vec![UNEXPECTED_ERROR.to_string()]));

        let e: ApiError = ServiceError::not_found("Restaurant").into();
        assert!(matches!(e, ApiError::NotFound(ref m) if m == "Restaurant not found"));

        // a price rejected inside the save hook is still reported as validation
        let hook = ModelError::from(ModelError::Validation("price out of range".into()).into_db_err());
        let e: ApiError = ServiceError::Model(hook).into();
        assert!(matches!(e, ApiError::BadRequest(ref m) if m == &vec![VALIDATION_ERRORS.to_string()]));

        let e: ApiError = ServiceError::Model(ModelError::Conflict("dup".into())).into();
        assert!(matches!(e, ApiError::BadRequest(ref m) if m == &vec![UNEXPECTED_ERROR.to_string()]));
    }

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::restaurant_not_found().into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::validation().into_response().status(), StatusCode::BAD_REQUEST);
    }
}
