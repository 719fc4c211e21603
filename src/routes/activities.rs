use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::{bearer_credential, fetch_activity};
use crate::error::AppError;
use crate::pipeline::gpx;
use crate::state::AppState;
use crate::types::activity::ActivitySummary;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/activities", get(list_activities))
        .route("/api/activity/:activity_id/gpx", get(export_gpx))
}

#[derive(Deserialize)]
struct ListActivitiesQuery {
    page: Option<u32>,
    /// Keep only this sport (`Run`, `Ride`, ...). All activities when absent.
    sport_type: Option<String>,
}

async fn list_activities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListActivitiesQuery>,
) -> Result<Json<Vec<ActivitySummary>>, AppError> {
    let credential = bearer_credential(&headers)?;
    let page = params.page.unwrap_or(1);

    let mut activities = state.strava().list_activities(&credential, page).await?;
    if let Some(sport) = params.sport_type.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        activities.retain(|activity| activity.is_sport(sport));
    }
    tracing::info!("Listed {} activities (page {})", activities.len(), page);

    Ok(Json(activities))
}

async fn export_gpx(
    State(state): State<AppState>,
    Path(activity_id): Path<u64>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let credential = bearer_credential(&headers)?;
    let activity = fetch_activity(&state, &credential, activity_id).await?;
    let document = gpx::write_gpx(&activity.points, Some(activity.summary.name.as_str()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/gpx+xml".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"strava_activity{}.gpx\"", activity_id),
            ),
        ],
        document,
    ))
}
