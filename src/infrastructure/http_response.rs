// HTTP response utilities for JSON error bodies
use crate::domain::error::AnalyticsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Wraps an analytics error so handlers can return it with `?`.
#[derive(Debug)]
pub struct ApiError(pub AnalyticsError);

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            AnalyticsError::InvalidPlayerCount { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AnalyticsError::UnknownPlayer(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.0 {
            AnalyticsError::MissingCoordinate { .. } => "missing_coordinate",
            AnalyticsError::InvalidPlayerCount { .. } => "invalid_player_count",
            AnalyticsError::UnknownPlayer(_) => "unknown_player",
            AnalyticsError::InvalidZoneCount(_) => "invalid_zone_count",
            AnalyticsError::InvalidDimensions(_) => "invalid_dimensions",
            AnalyticsError::DatasetTooLarge { .. } => "dataset_too_large",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = ErrorBody {
            error: self.error_code(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
