use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use super::RenderError;
use crate::visibility::VisibilityReport;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    date: String,
    visible: bool,
    elevation: f64,
    moon: JsonMoon,
    ranges: Vec<JsonRange>,
    target: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonMoon {
    phase: String,
    percentage: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRange {
    from: String,
    to: String,
    cloud_cover: Option<f64>,
    precipitation_probability: Option<f64>,
}

fn local<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.with_timezone(tz).format(DATE_TIME_FORMAT).to_string()
}

/// Single-line JSON document; unknown metrics are `null`.
pub fn render_json<Tz>(report: &VisibilityReport, tz: &Tz) -> Result<String, RenderError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let doc = JsonReport {
        date: report.date.format("%Y-%m-%d").to_string(),
        visible: report.is_visible(),
        elevation: report.elevation.value(),
        moon: JsonMoon {
            phase: report.moon.phase.to_string(),
            percentage: report.moon.illumination,
        },
        ranges: report
            .ranges
            .iter()
            .map(|r| JsonRange {
                from: local(r.interval.start(), tz),
                to: local(r.interval.end(), tz),
                cloud_cover: r.cloud_cover,
                precipitation_probability: r.precipitation_probability,
            })
            .collect(),
        target: &report.target,
    };
    serde_json::to_string(&doc).map_err(|e| RenderError::Serialize(e.to_string()))
}
