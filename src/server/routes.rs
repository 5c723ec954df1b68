//! HTTP route handlers

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::debate::{self, prompts, DebateRequest, DebateResponse};
use crate::error::{ApiError, ApiResult};

use super::AppState;

/// Body of a `GET /suggested-topics` response
#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<&'static str>,
}

/// Run one debate turn through the completion provider
pub async fn debate(
    State(state): State<AppState>,
    Json(request): Json<DebateRequest>,
) -> ApiResult<Json<DebateResponse>> {
    let provider = state
        .provider
        .as_ref()
        .ok_or(ApiError::ClientNotConfigured)?;

    tracing::info!(
        "Debate turn: topic={:?}, history={} messages",
        request.topic,
        request.history.len()
    );

    let messages = debate::build_messages(&request, &state.window);
    let response = provider.complete(&messages).await?;

    Ok(Json(DebateResponse { response }))
}

/// Return the fixed list of debate starters
pub async fn suggested_topics() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: prompts::SUGGESTED_TOPICS.to_vec(),
    })
}

/// Serve the frontend index for the site root
pub async fn spa_root(State(state): State<AppState>) -> Response {
    state.site.respond("").await
}

/// Serve a bundle file, or the index for client-side routes
pub async fn spa_fallback(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    state.site.respond(&path).await
}
