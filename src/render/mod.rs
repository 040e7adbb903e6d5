//! Human, JSON and iCalendar renderings of a [`VisibilityReport`].
//!
//! Text and JSON show wall-clock times in the caller's timezone; ICS always
//! uses UTC stamps and leaves the conversion to the calendar client.

mod error;
mod ics;
mod json;
mod text;

pub use error::RenderError;
pub use ics::render_ics;
pub use json::render_json;
pub use text::render_text;

use std::fmt::Display;

use chrono::{TimeZone, Utc};

use crate::visibility::VisibilityReport;

/// Output flavour selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    Ics,
}

/// Renders `report` as `format`, with local times in `tz`.
pub fn render<Tz>(
    report: &VisibilityReport,
    format: Format,
    tz: &Tz,
) -> Result<String, RenderError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match format {
        Format::Text => render_text(report, tz),
        Format::Json => render_json(report, tz),
        Format::Ics => render_ics(report, Utc::now()),
    }
}

/// Metric as `12.5%`, or `N/A` when unknown.
fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.1}%"))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use qtty::Degrees;

    use crate::astro::{MoonData, MoonPhase};
    use crate::interval::TimeInterval;
    use crate::visibility::{Composition, VisibilityReport};
    use crate::weather::WeatherRange;

    pub fn at(hour: i64, minute: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 20, 0, 0, 0).unwrap()
            + Duration::hours(hour)
            + Duration::minutes(minute)
    }

    pub fn report(ranges: Vec<WeatherRange>) -> VisibilityReport {
        let windows = ranges.iter().map(|r| r.interval).collect::<Vec<_>>();
        VisibilityReport {
            date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            target: "Galactic Center".to_string(),
            composition: if windows.is_empty() {
                Composition::FullyExcluded
            } else {
                Composition::Visible(windows)
            },
            ranges,
            elevation: Degrees::new(10.94),
            moon: MoonData {
                phase_angle: Degrees::new(335.0),
                phase: MoonPhase::WaningCrescent,
                illumination: 21.26,
            },
        }
    }

    /// One measured range 21:05–23:00 and one unknown range 00:30–02:10 UTC.
    pub fn two_ranges() -> VisibilityReport {
        report(vec![
            WeatherRange {
                interval: TimeInterval::new(at(21, 5), at(23, 0)).unwrap(),
                cloud_cover: Some(12.5),
                precipitation_probability: Some(0.0),
            },
            WeatherRange::unknown(TimeInterval::new(at(24, 30), at(26, 10)).unwrap()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formatting() {
        assert_eq!(percent(Some(12.5)), "12.5%");
        assert_eq!(percent(Some(0.0)), "0.0%");
        assert_eq!(percent(None), "N/A");
    }

    #[test]
    fn dispatches_on_format() {
        let report = fixtures::two_ranges();
        let text = render(&report, Format::Text, &Utc).unwrap();
        assert!(text.starts_with("Galactic Center Visibility"));

        let json = render(&report, Format::Json, &Utc).unwrap();
        assert!(json.starts_with('{'));

        let ics = render(&report, Format::Ics, &Utc).unwrap();
        assert!(ics.starts_with("BEGIN:VCALENDAR"));
    }
}
