//! # Backend Proxy
//!
//! Every route is a straight pass-through to the spell backend at `API_BASE_URL`.
//!
//! The browser only ever talks to us, same origin. We forward the JSON payload to
//! the matching backend endpoint and hand back whatever the backend answered,
//! status code and body untouched. Error statuses from the backend are relayed
//! like any other answer, they are not failures of the proxy.
//!
//! The proxy itself only fails when it never gets a JSON answer:
//! - backend unreachable (connection refused, DNS, reset mid-body)
//! - backend answered with something that is not JSON
//!
//! No retries and no timeout. A hung backend holds that one request open.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AppError;

#[derive(Debug)]
pub struct Relayed {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub async fn post_json<T>(client: &Client, url: &str, payload: &T) -> Result<Relayed, AppError>
where
    T: Serialize + ?Sized,
{
    debug!("POST {url}");

    let response = client.post(url).json(payload).send().await?;

    relay(response).await
}

pub async fn get_json(client: &Client, url: &str) -> Result<Relayed, AppError> {
    debug!("GET {url}");

    let response = client.get(url).send().await?;

    relay(response).await
}

async fn relay(response: reqwest::Response) -> Result<Relayed, AppError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    let body = serde_json::from_slice(&bytes)
        .map_err(|source| AppError::NonJsonResponse { status, source })?;

    if !status.is_success() {
        warn!("Backend answered {status}, relaying as-is");
    }

    Ok(Relayed { status, body })
}
