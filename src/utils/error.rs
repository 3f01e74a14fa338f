use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hubspot::HubSpotError;
use serde_json::json;
use thiserror::Error;

use crate::utils::logging::log_hubspot_api_error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    HubSpot(#[from] HubSpotError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Funcionalidade desabilitada por falta de configuração (ex: OAuth)
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::HubSpot(err) => hubspot_status(err),
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Erros 4xx da plataforma são repassados; o resto vira 502
fn hubspot_status(err: &HubSpotError) -> StatusCode {
    match err {
        HubSpotError::ValidationError(_) => StatusCode::BAD_REQUEST,
        // sem token (nem estático nem por chamada) ou com os dois
        HubSpotError::ConfigError(_) => StatusCode::UNAUTHORIZED,
        HubSpotError::ApiError { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(|s| s.is_client_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        HubSpotError::HttpError { .. } | HubSpotError::JsonError { .. } => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::HubSpot(err) = &self {
            log_hubspot_api_error(err);
        }

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
