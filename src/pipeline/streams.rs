use chrono::{DateTime, Duration, Utc};

use crate::error::StreamError;
use crate::types::activity::{StreamSet, Track, TrackPoint};

/// Zips Strava's `latlng`, `time` and `altitude` streams into a track.
///
/// `time` holds second offsets from `start`. The altitude stream is optional,
/// and so is each of its samples. When the streams disagree in length the
/// track stops at the shorter of `latlng` and `time`.
pub fn track_from_streams(streams: &StreamSet, start: DateTime<Utc>) -> Result<Track, StreamError> {
    let latlng = &streams
        .latlng
        .as_ref()
        .ok_or(StreamError::MissingStream("latlng"))?
        .data;
    let time = &streams
        .time
        .as_ref()
        .ok_or(StreamError::MissingStream("time"))?
        .data;
    let altitude = streams
        .altitude
        .as_ref()
        .map(|stream| stream.data.as_slice())
        .unwrap_or_default();

    let misaligned = latlng.len() != time.len()
        || (streams.altitude.is_some() && altitude.len() != latlng.len());
    if misaligned {
        tracing::warn!(
            "Misaligned activity streams (latlng={}, time={}, altitude={}), truncating",
            latlng.len(),
            time.len(),
            altitude.len()
        );
    }

    let mut track = Vec::with_capacity(latlng.len().min(time.len()));
    for (idx, (&[latitude, longitude], &offset)) in latlng.iter().zip(time).enumerate() {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(StreamError::InvalidCoordinate {
                index: idx,
                latitude,
                longitude,
            });
        }
        if !offset.is_finite() {
            return Err(StreamError::InvalidTime(idx));
        }

        // `as i64` saturates; try_milliseconds rejects the saturated extremes.
        let timestamp = Duration::try_milliseconds((offset * 1000.0).round() as i64)
            .and_then(|delta| start.checked_add_signed(delta))
            .ok_or(StreamError::InvalidTime(idx))?;

        track.push(TrackPoint {
            latitude,
            longitude,
            altitude: altitude.get(idx).copied().flatten(),
            timestamp,
        });
    }

    Ok(track)
}

/// Whether timestamps never go backwards along the track.
pub fn is_chronological(track: &[TrackPoint]) -> bool {
    track
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp)
}
