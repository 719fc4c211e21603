pub mod config;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod strava;
pub mod types;

use axum::Router;

use crate::state::AppState;

/// All API routes, without the outer middleware layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::activities::router())
        .merge(routes::compare::router())
        .merge(routes::enrich::router())
        .with_state(state)
}
