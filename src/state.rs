use crate::config::Config;
use crate::error::StravaError;
use crate::strava::StravaClient;

#[derive(Clone)]
pub struct AppState {
    strava: StravaClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, StravaError> {
        Ok(Self {
            strava: StravaClient::new(&config)?,
        })
    }

    pub fn strava(&self) -> &StravaClient {
        &self.strava
    }
}
