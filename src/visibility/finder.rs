//! One night's visibility computation, end to end.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use qtty::Degrees;

use super::{attach_to_windows, compose, VisibilityConfig, VisibilityError, VisibilityReport};
use crate::astro::{Astronomy, Site};
use crate::weather::{fetch_ranges, WeatherSource};

/// UTC instant of local midnight starting `date` in `tz`.
///
/// On an ambiguous midnight the earlier instant wins.
pub fn start_of_day<Tz: TimeZone>(
    date: NaiveDate,
    tz: &Tz,
) -> Result<DateTime<Utc>, VisibilityError> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or(VisibilityError::InvalidDate(date))
}

/// Computes when the target can be observed during the night starting on
/// `date` (local to `tz`) at `site`.
///
/// Daylight of both the evening and the following morning is removed from
/// the target's window, and so is moonlight when the Moon is brighter than
/// `config.moon_threshold`. Weather is fetched at most once and only when
/// something is left; an unavailable weather service never hides a window.
pub async fn find_visibility<A, W, Tz>(
    astro: &A,
    weather: &W,
    site: &Site,
    date: NaiveDate,
    tz: &Tz,
    config: &VisibilityConfig,
) -> Result<VisibilityReport, VisibilityError>
where
    A: Astronomy + ?Sized,
    W: WeatherSource + ?Sized,
    Tz: TimeZone,
{
    let today = start_of_day(date, tz)?;
    let tomorrow = today + Duration::days(1);

    let base = astro.target_window(today);
    let moon = astro.moon(today);

    let mut exclusions = vec![astro.twilight_window(today), astro.twilight_window(tomorrow)];
    if config.moon_interferes(moon.illumination) {
        exclusions.push(astro.moon_window(today));
    } else {
        tracing::debug!(illumination = moon.illumination, "moon too faint to matter");
    }

    let composition = compose(base, &exclusions);
    let windows = composition.windows();

    let ranges = if windows.is_empty() {
        Vec::new()
    } else {
        let weather_ranges = fetch_ranges(weather, windows, site, &config.thresholds()).await?;
        let ranges = attach_to_windows(&weather_ranges, windows);
        tracing::debug!(ranges = ranges.len(), "weather applied to visible windows");
        ranges
    };

    let elevation = windows
        .first()
        .map_or(Degrees::new(0.0), |first| astro.target_elevation(first.start()));

    Ok(VisibilityReport {
        date,
        target: astro.target_name().to_string(),
        composition,
        ranges,
        elevation,
        moon,
    })
}
