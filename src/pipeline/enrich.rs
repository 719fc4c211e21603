use crate::types::activity::TrackPoint;
use crate::types::series::EnrichedTrackPoint;

/// IUGG mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Derives per-point distance and elevation series for a track.
///
/// The output has exactly one entry per input point, in the same order. The
/// first point has zero segment distance and zero elevation delta. A missing
/// altitude on either side of a segment yields a zero delta for that segment,
/// so the cumulative elevation carries forward unchanged across the gap.
///
/// Segments are measured in positional order; timestamps are not consulted.
pub fn enrich(track: &[TrackPoint]) -> Vec<EnrichedTrackPoint> {
    let mut enriched = Vec::with_capacity(track.len());
    let mut cumulative_distance_km = 0.0;
    let mut cumulative_elevation_gain_m = 0.0;

    for (idx, point) in track.iter().enumerate() {
        let (segment_distance_m, elevation_delta_m) = match idx.checked_sub(1) {
            Some(prev_idx) => {
                let prev = &track[prev_idx];
                (
                    haversine_distance(prev.latitude, prev.longitude, point.latitude, point.longitude),
                    elevation_delta(prev.altitude, point.altitude),
                )
            }
            None => (0.0, 0.0),
        };

        cumulative_distance_km += segment_distance_m / 1000.0;
        cumulative_elevation_gain_m += elevation_delta_m;

        enriched.push(EnrichedTrackPoint {
            point: point.clone(),
            segment_distance_m,
            cumulative_distance_km,
            elevation_delta_m,
            cumulative_elevation_gain_m,
        });
    }

    enriched
}

/// Sum of the upward elevation deltas only.
pub fn total_elevation_gain(enriched: &[EnrichedTrackPoint]) -> f64 {
    enriched
        .iter()
        .map(|p| p.elevation_delta_m)
        .filter(|delta| *delta > 0.0)
        .sum()
}

/// Great-circle distance in meters between two coordinates given in degrees,
/// rounded to the centimeter. Non-finite input yields `0.0`.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    finite_or_zero(round2(EARTH_RADIUS_M * c))
}

fn elevation_delta(prev: Option<f64>, curr: Option<f64>) -> f64 {
    match (prev, curr) {
        (Some(prev), Some(curr)) => finite_or_zero(curr - prev),
        _ => 0.0,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
