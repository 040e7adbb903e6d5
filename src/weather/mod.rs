//! Hourly weather samples and their aggregation into acceptable-condition ranges.

mod aggregate;
mod error;
mod open_meteo;
mod source;

pub use aggregate::aggregate;
pub use error::WeatherError;
pub use open_meteo::{parse_forecast, OpenMeteo, WeatherConfig};
pub use source::{fetch_ranges, fetch_samples, WeatherSource};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::interval::TimeInterval;

/// One reporting hour as delivered by a weather service.
///
/// A `None` metric means the service did not know the value for this hour,
/// which is not the same as a reading of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSample {
    pub time: DateTime<Utc>,
    pub cloud_cover: Option<f64>,
    pub precipitation_probability: Option<f64>,
}

impl WeatherSample {
    pub fn new(
        time: DateTime<Utc>,
        cloud_cover: Option<f64>,
        precipitation_probability: Option<f64>,
    ) -> Self {
        Self {
            time,
            cloud_cover,
            precipitation_probability,
        }
    }
}

/// Averaged conditions over a contiguous run of acceptable samples.
///
/// Both metrics are `None` when no weather data was available at all; such a
/// range is treated as acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRange {
    pub interval: TimeInterval,
    pub cloud_cover: Option<f64>,
    pub precipitation_probability: Option<f64>,
}

impl WeatherRange {
    /// Range with unknown conditions ("no data, assume visible").
    pub fn unknown(interval: TimeInterval) -> Self {
        Self {
            interval,
            cloud_cover: None,
            precipitation_probability: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.cloud_cover.is_none() && self.precipitation_probability.is_none()
    }

    /// Same metrics over a different interval.
    pub fn with_interval(&self, interval: TimeInterval) -> Self {
        Self { interval, ..*self }
    }
}

/// Upper bounds (exclusive, in percent) for a sample to count as acceptable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionThresholds {
    pub cloud_cover: f64,
    pub precipitation_probability: f64,
}

impl ConditionThresholds {
    pub fn new(cloud_cover: f64, precipitation_probability: f64) -> Self {
        Self {
            cloud_cover,
            precipitation_probability,
        }
    }

    /// A sample with any unknown metric is acceptable; otherwise both metrics
    /// must stay strictly below their threshold.
    pub fn accepts(&self, sample: &WeatherSample) -> bool {
        match (sample.cloud_cover, sample.precipitation_probability) {
            (Some(cloud), Some(precipitation)) => {
                cloud < self.cloud_cover && precipitation < self.precipitation_probability
            }
            _ => true,
        }
    }
}
