//! Open-Meteo forecast client.
//!
//! Requests hourly cloud cover and precipitation probability for a window.
//! Timestamps are exchanged in GMT so no timezone database is needed.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use super::{WeatherError, WeatherSample, WeatherSource};
use crate::astro::Site;
use crate::interval::TimeInterval;

const HOURLY_METRICS: &str = "cloud_cover,precipitation_probability";
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Connection settings for the weather service.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Scheme and host of the API, without the `/v1/forecast` path.
    pub base_url: String,
    /// Upper bound for the whole request.
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.open-meteo.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Weather source backed by the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlySeries,
}

/// Column-oriented hourly data. Metric columns may be missing, shorter than
/// `time`, or contain nulls.
#[derive(Debug, Deserialize)]
struct HourlySeries {
    time: Vec<String>,
    #[serde(default)]
    cloud_cover: Option<Vec<Option<f64>>>,
    #[serde(default)]
    precipitation_probability: Option<Vec<Option<f64>>>,
}

impl HourlySeries {
    fn metric(column: &Option<Vec<Option<f64>>>, index: usize) -> Option<f64> {
        column.as_ref()?.get(index).copied().flatten()
    }
}

impl OpenMeteo {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn forecast_url(&self) -> String {
        format!("{}/v1/forecast", self.base_url)
    }
}

#[async_trait]
impl WeatherSource for OpenMeteo {
    async fn hourly_samples(
        &self,
        window: &TimeInterval,
        site: &Site,
    ) -> Result<Vec<WeatherSample>, WeatherError> {
        let query = [
            ("latitude", site.latitude().value().to_string()),
            ("longitude", site.longitude().value().to_string()),
            ("elevation", site.height().value().to_string()),
            ("hourly", HOURLY_METRICS.to_string()),
            ("timezone", "GMT".to_string()),
            ("start_hour", window.start().format(TIME_FORMAT).to_string()),
            ("end_hour", window.end().format(TIME_FORMAT).to_string()),
        ];

        tracing::debug!(url = %self.forecast_url(), %window, "requesting hourly forecast");
        let response = self.client.get(self.forecast_url()).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_forecast(&body)
    }
}

/// Decodes an Open-Meteo forecast body into time-ordered samples.
pub fn parse_forecast(body: &str) -> Result<Vec<WeatherSample>, WeatherError> {
    let forecast: ForecastResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Decode(e.to_string()))?;
    let hourly = forecast.hourly;

    hourly
        .time
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let time = NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
                .map_err(|e| WeatherError::Decode(format!("bad timestamp `{raw}`: {e}")))?
                .and_utc();
            Ok(WeatherSample::new(
                time,
                HourlySeries::metric(&hourly.cloud_cover, i),
                HourlySeries::metric(&hourly.precipitation_probability, i),
            ))
        })
        .collect()
}
