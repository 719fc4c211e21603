use chrono::SecondsFormat;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::ExportError;
use crate::types::activity::TrackPoint;

const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
const CREATOR: &str = "flyby-rs";

/// Serializes a raw track as a GPX 1.1 document with a single track segment.
pub fn write_gpx(track: &[TrackPoint], name: Option<&str>) -> Result<String, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_document(&mut writer, track, name).map_err(|e| ExportError::Xml(e.to_string()))?;

    String::from_utf8(writer.into_inner()).map_err(|e| ExportError::Xml(e.to_string()))
}

fn write_document(
    writer: &mut Writer<Vec<u8>>,
    track: &[TrackPoint],
    name: Option<&str>,
) -> quick_xml::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("gpx").with_attributes([
        ("version", "1.1"),
        ("creator", CREATOR),
        ("xmlns", GPX_NAMESPACE),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("trk")))?;
    if let Some(name) = name {
        write_text_element(writer, "name", name)?;
    }
    writer.write_event(Event::Start(BytesStart::new("trkseg")))?;

    for point in track {
        let lat = point.latitude.to_string();
        let lon = point.longitude.to_string();
        writer.write_event(Event::Start(
            BytesStart::new("trkpt").with_attributes([("lat", lat.as_str()), ("lon", lon.as_str())]),
        ))?;
        if let Some(elevation) = point.altitude.filter(|value| value.is_finite()) {
            write_text_element(writer, "ele", &elevation.to_string())?;
        }
        let time = point.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        write_text_element(writer, "time", &time)?;
        writer.write_event(Event::End(BytesEnd::new("trkpt")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("trkseg")))?;
    writer.write_event(Event::End(BytesEnd::new("trk")))?;
    writer.write_event(Event::End(BytesEnd::new("gpx")))?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
