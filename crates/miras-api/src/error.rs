use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use miras_core::CatalogError;
use miras_geo::GeoError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::AssetNotFound { .. }
            | CatalogError::SegmentNotFound { .. }
            | CatalogError::NoteNotFound { .. }
            | CatalogError::ActorNotFound { .. } => Self::not_found(err.to_string()),
            CatalogError::Storage(_) => {
                tracing::error!(error = %err, "Store operation failed");
                Self::internal("Storage failure").with_details(err.to_string())
            }
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl From<GeoError> for ApiError {
    fn from(err: GeoError) -> Self {
        Self::bad_request(err.to_string())
    }
}
