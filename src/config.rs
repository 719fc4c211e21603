use std::time::Duration;

pub const DEFAULT_STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub strava_api_base: String,
    pub activities_per_page: u32,
    pub strava_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);

        let strava_api_base = std::env::var("STRAVA_API_BASE")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STRAVA_API_BASE.to_string());

        // Strava caps per_page at 200.
        let activities_per_page = std::env::var("ACTIVITIES_PER_PAGE")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(200)
            .clamp(1, 200);

        let timeout_seconds = std::env::var("STRAVA_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Self {
            port,
            strava_api_base,
            activities_per_page,
            strava_timeout: Duration::from_secs(timeout_seconds),
        }
    }

    /// Points the Strava client at a different API root (a proxy or a local mock).
    pub fn with_strava_api_base(mut self, base: impl Into<String>) -> Self {
        self.strava_api_base = base.into().trim_end_matches('/').to_string();
        self
    }
}
