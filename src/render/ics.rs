//! iCalendar export, one event per observable range.

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{percent, RenderError};
use crate::visibility::VisibilityReport;

const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const PRODUCT_ID: &str = "-//gcvis//Galactic Center Visibility//EN";

fn stamp(instant: DateTime<Utc>) -> String {
    instant.format(STAMP_FORMAT).to_string()
}

/// Escapes a TEXT property value.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a calendar with one `VEVENT` per range, stamped with `now`.
///
/// # Errors
///
/// [`RenderError::NotVisible`] when the report has no range, and
/// [`RenderError::Format`] when writing the calendar fails.
pub fn render_ics(report: &VisibilityReport, now: DateTime<Utc>) -> Result<String, RenderError> {
    if report.ranges.is_empty() {
        return Err(RenderError::NotVisible);
    }
    let mut out = String::new();
    write_calendar(&mut out, report, now)?;
    Ok(out)
}

fn write_calendar(out: &mut String, report: &VisibilityReport, now: DateTime<Utc>) -> fmt::Result {
    write!(out, "BEGIN:VCALENDAR\r\nVERSION:2.0\r\n")?;
    write!(out, "PRODID:{PRODUCT_ID}\r\nCALSCALE:GREGORIAN\r\n")?;

    for range in &report.ranges {
        let description = format!(
            "Elevation: {:.1}º\nCloudiness: {}\nPrecipitation: {}\nMoon: {} ({:.1}%)",
            report.elevation.value(),
            percent(range.cloud_cover),
            percent(range.precipitation_probability),
            report.moon.phase,
            report.moon.illumination,
        );

        write!(out, "BEGIN:VEVENT\r\n")?;
        write!(out, "UID:{}\r\n", Uuid::new_v4())?;
        write!(out, "DTSTAMP:{}\r\n", stamp(now))?;
        write!(out, "DTSTART:{}\r\n", stamp(range.interval.start()))?;
        write!(out, "DTEND:{}\r\n", stamp(range.interval.end()))?;
        write!(out, "SUMMARY:{}\r\n", escape(&format!("{} visible", report.target)))?;
        write!(out, "DESCRIPTION:{}\r\n", escape(&description))?;
        write!(out, "END:VEVENT\r\n")?;
    }

    write!(out, "END:VCALENDAR\r\n")
}
