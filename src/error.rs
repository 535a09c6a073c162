//! Error handling for the Saigon Flood Watch service
//!
//! Provides consistent error responses in English and Vietnamese

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Lookup errors
    #[error("No geocoding results for query: {0}")]
    GeocodeNotFound(String),

    #[error("Coordinates outside coverage area: {latitude}, {longitude}")]
    OutsideCoverage {
        latitude: String,
        longitude: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // External service errors
    #[error("Forecast service unavailable")]
    ForecastUnavailable,

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_vi: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::GeocodeNotFound(query) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "GEOCODE_NOT_FOUND".to_string(),
                    message_en: format!("No location found for \"{}\"", query),
                    message_vi: format!("Không tìm thấy địa điểm cho \"{}\"", query),
                },
            ),
            AppError::OutsideCoverage { latitude, longitude } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "OUTSIDE_COVERAGE".to_string(),
                    message_en: format!(
                        "Location ({}, {}) is outside the Ho Chi Minh City coverage area",
                        latitude, longitude
                    ),
                    message_vi: format!(
                        "Vị trí ({}, {}) nằm ngoài phạm vi Thành phố Hồ Chí Minh",
                        latitude, longitude
                    ),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_vi: format!("Dữ liệu không hợp lệ: {}", msg),
                },
            ),
            AppError::ForecastUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "FORECAST_UNAVAILABLE".to_string(),
                    message_en: "Weather service is temporarily unavailable".to_string(),
                    message_vi: "Dịch vụ thời tiết tạm thời không khả dụng".to_string(),
                },
            ),
            AppError::ExternalService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "EXTERNAL_SERVICE_ERROR".to_string(),
                    message_en: format!("External service error: {}", msg),
                    message_vi: format!("Lỗi dịch vụ bên ngoài: {}", msg),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_vi: format!("Lỗi cấu hình: {}", msg),
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_vi: "Đã xảy ra lỗi máy chủ nội bộ".to_string(),
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_vi: "Đã xảy ra lỗi máy chủ nội bộ".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
