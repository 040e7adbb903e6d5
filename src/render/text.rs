use std::fmt::{self, Display, Write};

use chrono::TimeZone;

use super::{percent, RenderError};
use crate::visibility::{Composition, VisibilityReport};

const TIME_FORMAT: &str = "%H:%M";

/// Plain-text summary with a tab-separated table of ranges.
pub fn render_text<Tz>(report: &VisibilityReport, tz: &Tz) -> Result<String, RenderError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write_text(&mut out, report, tz)?;
    Ok(out)
}

fn write_text<Tz>(out: &mut String, report: &VisibilityReport, tz: &Tz) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(out, "{} Visibility - {}", report.target, report.date.format("%Y-%m-%d"))?;
    writeln!(out, "Elevation: {:.1}º", report.elevation.value())?;
    writeln!(out, "Moon: {} ({:.1}%)", report.moon.phase, report.moon.illumination)?;
    writeln!(out)?;

    if report.ranges.is_empty() {
        let reason = match report.composition {
            Composition::NoWindow => "does not rise and set on this night",
            Composition::FullyExcluded => "is only up while the sky is too bright",
            Composition::Visible(_) => "is hidden by the weather",
        };
        return writeln!(out, "Not visible: {} {reason}", report.target);
    }

    writeln!(out, "From\tTo\tCloudiness\tPrecipitation")?;
    for range in &report.ranges {
        writeln!(
            out,
            "{}\t{}\t{}\t\t{}",
            range.interval.start().with_timezone(tz).format(TIME_FORMAT),
            range.interval.end().with_timezone(tz).format(TIME_FORMAT),
            percent(range.cloud_cover),
            percent(range.precipitation_probability),
        )?;
    }
    Ok(())
}
