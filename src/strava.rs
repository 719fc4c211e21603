use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::StravaError;
use crate::types::activity::{ActivitySummary, StreamSet};

const STREAM_KEYS: &str = "time,latlng,altitude";

/// An issued Strava access token.
///
/// Passed explicitly to every call. A refreshed token is a new `Credential`;
/// nothing here is ever mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    access_token: String,
}

impl Credential {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

#[derive(Debug, Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    per_page: u32,
}

impl StravaClient {
    pub fn new(config: &Config) -> Result<Self, StravaError> {
        let http = reqwest::Client::builder()
            .timeout(config.strava_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.strava_api_base.clone(),
            per_page: config.activities_per_page,
        })
    }

    pub async fn list_activities(
        &self,
        credential: &Credential,
        page: u32,
    ) -> Result<Vec<ActivitySummary>, StravaError> {
        let url = format!("{}/athlete/activities", self.base_url);
        let query = [
            ("per_page", self.per_page.to_string()),
            ("page", page.max(1).to_string()),
        ];
        let payload: Vec<Value> = self.get_json(&url, credential, &query).await?;

        Ok(payload.iter().filter_map(summary_from_value).collect())
    }

    pub async fn activity(
        &self,
        credential: &Credential,
        activity_id: u64,
    ) -> Result<ActivitySummary, StravaError> {
        let url = format!("{}/activities/{}", self.base_url, activity_id);
        let payload: Value = self.get_json(&url, credential, &[]).await?;

        summary_from_value(&payload).ok_or_else(|| {
            StravaError::Decode(format!("Activity {} response has no id", activity_id))
        })
    }

    pub async fn streams(
        &self,
        credential: &Credential,
        activity_id: u64,
    ) -> Result<StreamSet, StravaError> {
        let url = format!("{}/activities/{}/streams", self.base_url, activity_id);
        let query = [
            ("keys", STREAM_KEYS.to_string()),
            ("key_by_type", "true".to_string()),
        ];

        self.get_json(&url, credential, &query).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        credential: &Credential,
        query: &[(&str, String)],
    ) -> Result<T, StravaError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(credential.access_token())
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Strava request {} failed ({})", url, status);
            return Err(StravaError::Status { status, body });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| StravaError::Decode(err.to_string()))
    }
}

fn summary_from_value(activity: &Value) -> Option<ActivitySummary> {
    let id = activity.get("id").and_then(Value::as_u64)?;

    Some(ActivitySummary {
        id,
        name: activity
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("Activity")
            .to_string(),
        sport_type: activity
            .get("sport_type")
            .or_else(|| activity.get("type"))
            .and_then(Value::as_str)
            .map(str::to_string),
        activity_type: activity
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string),
        distance_m: activity
            .get("distance")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        moving_time_s: activity
            .get("moving_time")
            .and_then(Value::as_u64)
            .unwrap_or(0),
        elapsed_time_s: activity
            .get("elapsed_time")
            .and_then(Value::as_u64)
            .unwrap_or(0),
        total_elevation_gain_m: activity
            .get("total_elevation_gain")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        start_date: activity
            .get("start_date")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<DateTime<Utc>>().ok()),
    })
}
