use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::pipeline::enrich::{enrich, total_elevation_gain};
use crate::state::AppState;
use crate::types::activity::Track;
use crate::types::series::EnrichedTrackPoint;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/enrich", post(enrich_track))
}

#[derive(Deserialize)]
struct EnrichRequest {
    points: Track,
}

#[derive(Serialize)]
struct EnrichResponse {
    distance_km: f64,
    total_elevation_gain_m: f64,
    points: Vec<EnrichedTrackPoint>,
}

async fn enrich_track(Json(payload): Json<EnrichRequest>) -> Json<EnrichResponse> {
    let points = enrich(&payload.points);
    let distance_km = points.last().map_or(0.0, |p| p.cumulative_distance_km);
    let total_elevation_gain_m = total_elevation_gain(&points);

    tracing::debug!("Enriched {} points ({:.2} km)", points.len(), distance_km);

    Json(EnrichResponse {
        distance_km,
        total_elevation_gain_m,
        points,
    })
}
