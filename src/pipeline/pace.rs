use crate::pipeline::enrich::round2;

/// Minutes per kilometer, rounded to two decimals.
///
/// Returns `None` for a zero, negative or non-finite distance, and for a
/// negative or non-finite duration.
pub fn pace(distance_m: f64, duration_s: f64) -> Option<f64> {
    if !distance_m.is_finite() || !duration_s.is_finite() {
        return None;
    }
    if distance_m <= 0.0 || duration_s < 0.0 {
        return None;
    }

    Some(round2((duration_s / 60.0) / (distance_m / 1000.0)))
}

/// Renders a pace as `m:ss /km`, or `--:-- /km` when there is none.
pub fn format_pace(pace: Option<f64>) -> String {
    match pace {
        Some(minutes) => {
            let total_seconds = (minutes * 60.0).round() as u64;
            format!("{}:{:02} /km", total_seconds / 60, total_seconds % 60)
        }
        None => "--:-- /km".to_string(),
    }
}
