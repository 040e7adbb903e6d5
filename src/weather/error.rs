use thiserror::Error;

/// Reasons a weather fetch produced no samples.
///
/// Every variant means "weather unavailable"; callers recover by assuming
/// acceptable conditions rather than failing the run.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather service responded with status {0}")]
    Status(u16),

    #[error("malformed weather payload: {0}")]
    Decode(String),
}
