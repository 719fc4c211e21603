pub mod activities;
pub mod compare;
pub mod enrich;
pub mod health;

use axum::http::HeaderMap;

use crate::error::AppError;
use crate::pipeline::streams;
use crate::state::AppState;
use crate::strava::Credential;
use crate::types::activity::ActivityInput;

fn bearer_credential(headers: &HeaderMap) -> Result<Credential, AppError> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.trim().split_once(' '))
        // Auth schemes are case-insensitive (RFC 9110 §11.1).
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .map(Credential::new)
        .ok_or_else(|| AppError::Unauthorized("Missing Strava Bearer token".to_string()))
}

/// Fetches an activity's summary and streams and assembles its track.
async fn fetch_activity(
    state: &AppState,
    credential: &Credential,
    activity_id: u64,
) -> Result<ActivityInput, AppError> {
    let strava = state.strava();
    let (summary, stream_set) = tokio::try_join!(
        strava.activity(credential, activity_id),
        strava.streams(credential, activity_id)
    )?;

    let start = summary.start_date.unwrap_or_default();
    let points = streams::track_from_streams(&stream_set, start)?;

    tracing::info!(
        "Fetched activity {} ({} points, {:.2} km)",
        activity_id,
        points.len(),
        summary.distance_m / 1000.0
    );

    Ok(ActivityInput { summary, points })
}
