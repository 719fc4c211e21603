use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Activity has no {0} stream")]
    MissingStream(&'static str),
    #[error("Invalid coordinate at sample {index}: ({latitude}, {longitude})")]
    InvalidCoordinate {
        index: usize,
        latitude: f64,
        longitude: f64,
    },
    #[error("Invalid time offset at sample {0}")]
    InvalidTime(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("GPX generation failed: {0}")]
    Xml(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StravaError {
    #[error("Strava request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Strava responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Invalid Strava response: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Stream(#[from] StreamError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Strava(#[from] StravaError),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Stream(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Strava(StravaError::Status { status, .. }) => match status.as_u16() {
                401 | 403 => StatusCode::UNAUTHORIZED,
                404 => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            },
            AppError::Strava(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
