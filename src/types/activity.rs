use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded GPS sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Ordered samples for one activity. Order is traversal order along the path.
pub type Track = Vec<TrackPoint>;

/// Headline figures for one activity as reported by Strava.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySummary {
    pub id: u64,
    pub name: String,
    pub sport_type: Option<String>,
    /// Strava's legacy coarse `type` (`Run` for a `TrailRun`, say).
    pub activity_type: Option<String>,
    pub distance_m: f64,
    pub moving_time_s: u64,
    pub elapsed_time_s: u64,
    pub total_elevation_gain_m: f64,
    pub start_date: Option<DateTime<Utc>>,
}

impl ActivitySummary {
    /// Case-insensitive match against either `sport_type` or the legacy `type`.
    pub fn is_sport(&self, sport: &str) -> bool {
        [&self.sport_type, &self.activity_type]
            .into_iter()
            .flatten()
            .any(|kind| kind.eq_ignore_ascii_case(sport))
    }
}

/// Raw index-aligned streams for one activity (`key_by_type=true` layout).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamSet {
    pub time: Option<Stream<f64>>,
    pub latlng: Option<Stream<[f64; 2]>>,
    pub altitude: Option<Stream<Option<f64>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stream<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// An activity together with its track, ready to be compared.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityInput {
    #[serde(default)]
    pub summary: ActivitySummary,
    pub points: Track,
}
