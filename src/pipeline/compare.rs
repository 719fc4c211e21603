use crate::pipeline::enrich::{enrich, round2, total_elevation_gain};
use crate::pipeline::flyby::{flyby_collection, track_centre, DEFAULT_COLOURS};
use crate::pipeline::pace::{format_pace, pace};
use crate::pipeline::streams::is_chronological;
use crate::types::activity::{ActivityInput, ActivitySummary, TrackPoint};
use crate::types::series::{ActivityReport, Comparison, ProfilePoint};

/// Builds the dashboard figures and chart series for one activity.
///
/// Distance and pace come from the reported summary (moving time over
/// recorded distance); the climb total is recomputed from the track.
pub fn summarize(summary: &ActivitySummary, track: &[TrackPoint]) -> ActivityReport {
    let enriched = enrich(track);
    let chronological = is_chronological(track);
    if !chronological {
        tracing::warn!(
            "Activity {} has out-of-order timestamps; series follow recorded order",
            summary.id
        );
    }

    let pace_min_per_km = pace(summary.distance_m, summary.moving_time_s as f64);
    let profile = enriched
        .iter()
        .map(|p| ProfilePoint {
            distance_km: p.cumulative_distance_km,
            altitude_m: p.point.altitude.filter(|a| a.is_finite()).unwrap_or(0.0),
            cumulative_elevation_m: p.cumulative_elevation_gain_m,
        })
        .collect();

    ActivityReport {
        id: summary.id,
        name: summary.name.clone(),
        distance_km: round2(summary.distance_m / 1000.0),
        moving_time_s: summary.moving_time_s,
        pace_min_per_km,
        pace_display: format_pace(pace_min_per_km),
        total_elevation_gain_m: round2(total_elevation_gain(&enriched)),
        reported_elevation_gain_m: summary.total_elevation_gain_m,
        chronological,
        profile,
    }
}

pub fn compare(first: &ActivityInput, second: &ActivityInput) -> Comparison {
    let flyby = flyby_collection(&[
        (first.points.as_slice(), DEFAULT_COLOURS[0]),
        (second.points.as_slice(), DEFAULT_COLOURS[1]),
    ]);
    let centre = track_centre(&[first.points.as_slice(), second.points.as_slice()]);

    Comparison {
        first: summarize(&first.summary, &first.points),
        second: summarize(&second.summary, &second.points),
        centre,
        flyby,
    }
}
