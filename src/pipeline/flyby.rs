use chrono::SecondsFormat;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::types::activity::TrackPoint;

/// Line colours for the first and second activity of a comparison.
pub const DEFAULT_COLOURS: [&str; 2] = ["#3574F0", "#7D1A3B"];

/// A timestamped `LineString` feature for animating one track on a map.
///
/// Coordinates are `[longitude, latitude]`; `properties.times` holds one
/// RFC 3339 timestamp per coordinate.
pub fn flyby_feature(track: &[TrackPoint], colour: &str) -> Feature {
    let coordinates = track
        .iter()
        .map(|p| vec![p.longitude, p.latitude])
        .collect();
    let times: Vec<String> = track
        .iter()
        .map(|p| p.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
        .collect();

    let mut properties = JsonObject::new();
    properties.insert("style".to_string(), json!({ "color": colour }));
    properties.insert("icon".to_string(), json!("circle"));
    properties.insert(
        "iconstyle".to_string(),
        json!({
            "fillOpacity": 0.8,
            "stroke": "true",
            "radius": 4
        }),
    );
    properties.insert("times".to_string(), json!(times));

    Feature {
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
        properties: Some(properties),
        ..Default::default()
    }
}

pub fn flyby_collection(tracks: &[(&[TrackPoint], &str)]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: tracks
            .iter()
            .map(|(track, colour)| flyby_feature(track, colour))
            .collect(),
        foreign_members: None,
    }
}

/// Mean `[latitude, longitude]` over every point of every track, for centring
/// the map. `None` when all tracks are empty.
pub fn track_centre(tracks: &[&[TrackPoint]]) -> Option<[f64; 2]> {
    let (count, lat_sum, lon_sum) = tracks
        .iter()
        .flat_map(|track| track.iter())
        .fold((0usize, 0.0, 0.0), |(n, lat, lon), p| {
            (n + 1, lat + p.latitude, lon + p.longitude)
        });

    (count > 0).then(|| [lat_sum / count as f64, lon_sum / count as f64])
}
