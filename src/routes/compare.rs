use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use serde::Deserialize;

use super::{bearer_credential, fetch_activity};
use crate::error::AppError;
use crate::pipeline::compare;
use crate::state::AppState;
use crate::types::activity::ActivityInput;
use crate::types::series::Comparison;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/compare", post(compare_activities))
        .route("/api/compare/tracks", post(compare_tracks))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CompareRequest {
    first_id: u64,
    second_id: u64,
}

#[derive(Deserialize)]
struct CompareTracksRequest {
    first: ActivityInput,
    second: ActivityInput,
}

async fn compare_activities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<Comparison>, AppError> {
    let credential = bearer_credential(&headers)?;
    let (first, second) = tokio::try_join!(
        fetch_activity(&state, &credential, payload.first_id),
        fetch_activity(&state, &credential, payload.second_id)
    )?;

    tracing::info!(
        "Comparing activities {} and {}",
        payload.first_id,
        payload.second_id
    );

    Ok(Json(compare::compare(&first, &second)))
}

async fn compare_tracks(Json(payload): Json<CompareTracksRequest>) -> Json<Comparison> {
    Json(compare::compare(&payload.first, &payload.second))
}
