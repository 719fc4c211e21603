use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

use crate::types::activity::TrackPoint;

/// A track point with its derived distance and elevation series values.
///
/// Every derived field is a finite number, including on the first point and
/// across altitude gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTrackPoint {
    #[serde(flatten)]
    pub point: TrackPoint,
    pub segment_distance_m: f64,
    pub cumulative_distance_km: f64,
    pub elevation_delta_m: f64,
    /// Signed running sum of `elevation_delta_m`. This can go down; see
    /// `total_elevation_gain` for the climb-only figure.
    pub cumulative_elevation_gain_m: f64,
}

/// One x/y sample of the elevation chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub distance_km: f64,
    pub altitude_m: f64,
    pub cumulative_elevation_m: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityReport {
    pub id: u64,
    pub name: String,
    pub distance_km: f64,
    pub moving_time_s: u64,
    pub pace_min_per_km: Option<f64>,
    pub pace_display: String,
    pub total_elevation_gain_m: f64,
    pub reported_elevation_gain_m: f64,
    pub chronological: bool,
    pub profile: Vec<ProfilePoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub first: ActivityReport,
    pub second: ActivityReport,
    /// `[latitude, longitude]` mean of both tracks; `null` when both are empty.
    pub centre: Option<[f64; 2]>,
    pub flyby: FeatureCollection,
}
