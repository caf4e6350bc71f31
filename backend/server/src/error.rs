use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use spellbook::ErrorBody;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("Backend unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend answered {status} with a non-JSON body: {source}")]
    NonJsonResponse {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    pub fn with_message(self, message: &'static str) -> RouteError {
        RouteError {
            message,
            source: self,
        }
    }
}

/// Failure of a proxy route before any backend JSON came back.
///
/// Only `message` reaches the caller, the cause is logged.
#[derive(Debug)]
pub struct RouteError {
    pub message: &'static str,
    pub source: AppError,
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        error!(error = %self.source, "{}", self.message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.message.to_string(),
            }),
        )
            .into_response()
    }
}
