use async_trait::async_trait;
use chrono::Duration;

use super::{aggregate, ConditionThresholds, WeatherError, WeatherRange, WeatherSample};
use crate::astro::Site;
use crate::interval::{IntervalError, TimeInterval};

/// Remote provider of hourly weather samples.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetches the samples reported for `window` at `site`, ordered by time.
    async fn hourly_samples(
        &self,
        window: &TimeInterval,
        site: &Site,
    ) -> Result<Vec<WeatherSample>, WeatherError>;
}

/// Fetches samples once, turning any failure into an empty series.
///
/// Weather is advisory: an unreachable service must never hide a window that
/// is astronomically valid, so errors are logged and swallowed here.
pub async fn fetch_samples<S>(source: &S, window: &TimeInterval, site: &Site) -> Vec<WeatherSample>
where
    S: WeatherSource + ?Sized,
{
    match source.hourly_samples(window, site).await {
        Ok(samples) => {
            tracing::debug!(count = samples.len(), %window, "weather samples received");
            samples
        }
        Err(err) => {
            tracing::warn!(%err, "weather unavailable, assuming acceptable conditions");
            Vec::new()
        }
    }
}

/// Whether the reporting hour `[time, time + 1h)` of `sample` overlaps any
/// of `windows`. A sample whose hour cannot be represented never does.
fn reports_into(sample: &WeatherSample, windows: &[TimeInterval]) -> bool {
    sample
        .time
        .checked_add_signed(Duration::hours(1))
        .and_then(|end| TimeInterval::new(sample.time, end).ok())
        .is_some_and(|hour| windows.iter().any(|w| w.overlaps(&hour)))
}

/// Fetches weather once over the hull of `windows` and aggregates it.
///
/// `windows` must be ascending and disjoint. Samples whose hour falls
/// entirely into a gap between windows are discarded before aggregation so
/// excluded time never shapes a run or its averages. When nothing usable
/// comes back the whole hull is reported as a single range of unknown
/// conditions.
pub async fn fetch_ranges<S>(
    source: &S,
    windows: &[TimeInterval],
    site: &Site,
    thresholds: &ConditionThresholds,
) -> Result<Vec<WeatherRange>, IntervalError>
where
    S: WeatherSource + ?Sized,
{
    let (Some(first), Some(last)) = (windows.first(), windows.last()) else {
        return Ok(Vec::new());
    };
    let hull = TimeInterval::new(first.start(), last.end())?;

    let samples: Vec<WeatherSample> = fetch_samples(source, &hull, site)
        .await
        .into_iter()
        .filter(|s| reports_into(s, windows))
        .collect();

    if samples.is_empty() {
        tracing::warn!(%hull, "no usable weather samples, assuming acceptable conditions");
        return Ok(vec![WeatherRange::unknown(hull)]);
    }
    Ok(aggregate(&samples, &hull, thresholds))
}
