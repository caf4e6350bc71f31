use std::sync::Arc;

use axum::{body::Bytes, extract::State as AxumState};
use serde_json::Value;
use spellbook::{
    ImportRequest,
    models::{IMPORT_ENDPOINT, SPELLS_ENDPOINT},
};

use crate::{
    error::{AppError, RouteError},
    proxy::{Relayed, get_json, post_json},
    state::State,
    utils::parse_body,
};

pub const CAST_FAILED: &str = "Failed to cast spell";
pub const LIST_FAILED: &str = "Failed to fetch spells";
pub const IMPORT_FAILED: &str = "Failed to upload YAML file";

fn failed(message: &'static str) -> impl FnOnce(AppError) -> RouteError {
    move |e| e.with_message(message)
}

pub async fn cast_handler(
    AxumState(state): AxumState<Arc<State>>,
    body: Bytes,
) -> Result<Relayed, RouteError> {
    let payload: Value = parse_body(&body).map_err(failed(CAST_FAILED))?;

    post_json(&state.client, &state.config.endpoint(SPELLS_ENDPOINT), &payload)
        .await
        .map_err(failed(CAST_FAILED))
}

pub async fn list_handler(AxumState(state): AxumState<Arc<State>>) -> Result<Relayed, RouteError> {
    get_json(&state.client, &state.config.endpoint(SPELLS_ENDPOINT))
        .await
        .map_err(failed(LIST_FAILED))
}

pub async fn import_handler(
    AxumState(state): AxumState<Arc<State>>,
    body: Bytes,
) -> Result<Relayed, RouteError> {
    let payload: ImportRequest = parse_body(&body).map_err(failed(IMPORT_FAILED))?;

    post_json(&state.client, &state.config.endpoint(IMPORT_ENDPOINT), &payload)
        .await
        .map_err(failed(IMPORT_FAILED))
}
