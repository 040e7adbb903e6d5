use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use qtty::Degrees;

use super::*;
use crate::astro::{Astronomy, MoonData, MoonPhase, Site};
use crate::interval::TimeInterval;
use crate::weather::{WeatherError, WeatherRange, WeatherSample, WeatherSource};

// ─── Fixtures ──────────────────────────────────────────────────────────

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
}

/// `hour` hours after midnight UTC of [`date`].
fn at(hour: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 20, 0, 0, 0).unwrap() + Duration::hours(hour)
}

fn at_min(hour: i64, minute: i64) -> DateTime<Utc> {
    at(hour) + Duration::minutes(minute)
}

fn iv(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeInterval {
    TimeInterval::new(start, end).unwrap()
}

fn site() -> Site {
    Site::new(50.11, 8.68, 0.0).unwrap()
}

/// Canned astronomy keyed on the reference instant.
struct FakeSky {
    today: DateTime<Utc>,
    target: Option<TimeInterval>,
    twilight_today: Option<TimeInterval>,
    twilight_tomorrow: Option<TimeInterval>,
    moon_window: Option<TimeInterval>,
    illumination: f64,
}

impl FakeSky {
    /// Summer night: target up 20:00–02:00, dark 21:00–03:00.
    fn summer() -> Self {
        Self {
            today: at(0),
            target: Some(iv(at(20), at(26))),
            twilight_today: Some(iv(at(3), at(21))),
            twilight_tomorrow: Some(iv(at(27), at(45))),
            moon_window: Some(iv(at(23), at_min(24, 30))),
            illumination: 80.0,
        }
    }
}

impl Astronomy for FakeSky {
    fn target_name(&self) -> &str {
        "Galactic Center"
    }

    fn target_window(&self, _reference: DateTime<Utc>) -> Option<TimeInterval> {
        self.target
    }

    fn twilight_window(&self, reference: DateTime<Utc>) -> Option<TimeInterval> {
        if reference == self.today {
            self.twilight_today
        } else {
            self.twilight_tomorrow
        }
    }

    fn moon_window(&self, _reference: DateTime<Utc>) -> Option<TimeInterval> {
        self.moon_window
    }

    fn moon(&self, _reference: DateTime<Utc>) -> MoonData {
        MoonData {
            phase_angle: Degrees::new(150.0),
            phase: MoonPhase::WaxingGibbous,
            illumination: self.illumination,
        }
    }

    fn target_elevation(&self, at: DateTime<Utc>) -> Degrees {
        // Rises by one degree per hour after 20:00.
        Degrees::new((at - self.today).num_minutes() as f64 / 60.0 - 20.0)
    }
}

/// Weather source that counts how often it is asked.
struct CountingWeather {
    calls: AtomicUsize,
    samples: Result<Vec<WeatherSample>, u16>,
}

impl CountingWeather {
    fn with(samples: Vec<WeatherSample>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            samples: Ok(samples),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            samples: Err(status),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherSource for CountingWeather {
    async fn hourly_samples(
        &self,
        _window: &TimeInterval,
        _site: &Site,
    ) -> Result<Vec<WeatherSample>, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.samples.clone().map_err(WeatherError::Status)
    }
}

fn clear(hour: i64, cloud: f64) -> WeatherSample {
    WeatherSample::new(at(hour), Some(cloud), Some(0.0))
}

async fn run(sky: &FakeSky, weather: &CountingWeather) -> VisibilityReport {
    find_visibility(sky, weather, &site(), date(), &Utc, &VisibilityConfig::default())
        .await
        .unwrap()
}

// ─── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod local_midnight {
    use super::*;

    #[test]
    fn utc_midnight() {
        assert_eq!(start_of_day(date(), &Utc).unwrap(), at(0));
    }

    #[test]
    fn local_midnight_east_of_greenwich() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(start_of_day(date(), &cest).unwrap(), at(-2));
    }
}

#[cfg(test)]
mod night {
    use super::*;

    #[tokio::test]
    async fn no_base_window_skips_weather() {
        let sky = FakeSky {
            target: None,
            ..FakeSky::summer()
        };
        let weather = CountingWeather::with(vec![clear(21, 0.0)]);

        let report = run(&sky, &weather).await;

        assert_eq!(report.composition, Composition::NoWindow);
        assert!(report.ranges.is_empty());
        assert!(!report.is_visible());
        assert_eq!(report.elevation.value(), 0.0);
        assert_eq!(weather.calls(), 0);
    }

    #[tokio::test]
    async fn fully_excluded_window_skips_weather() {
        let sky = FakeSky {
            target: Some(iv(at(10), at(15))),
            ..FakeSky::summer()
        };
        let weather = CountingWeather::with(Vec::new());

        let report = run(&sky, &weather).await;

        assert_eq!(report.composition, Composition::FullyExcluded);
        assert!(!report.is_visible());
        assert_eq!(weather.calls(), 0);
    }

    #[tokio::test]
    async fn bright_moon_splits_night_and_weather_follows() {
        let sky = FakeSky::summer();
        let weather = CountingWeather::with(vec![
            clear(21, 10.0),
            clear(22, 10.0),
            // Hidden behind the Moon: must not break the run.
            clear(23, 100.0),
            clear(24, 20.0),
            clear(25, 10.0),
        ]);

        let report = run(&sky, &weather).await;

        let visible = [iv(at(21), at(23)), iv(at_min(24, 30), at(26))];
        assert_eq!(report.composition, Composition::Visible(visible.to_vec()));
        assert_eq!(weather.calls(), 1);

        assert_eq!(report.ranges.len(), 2);
        assert_eq!(report.ranges[0].interval, visible[0]);
        assert_eq!(report.ranges[1].interval, visible[1]);
        assert!(report.ranges.iter().all(|r| r.cloud_cover == Some(12.5)));

        assert_eq!(report.elevation.value(), 1.0);
        assert_eq!(report.target, "Galactic Center");
        assert_eq!(report.date, date());
    }

    #[tokio::test]
    async fn faint_moon_is_ignored() {
        let sky = FakeSky {
            illumination: 50.0,
            ..FakeSky::summer()
        };
        let weather = CountingWeather::with(vec![clear(21, 0.0)]);

        let report = run(&sky, &weather).await;

        assert_eq!(
            report.composition,
            Composition::Visible(vec![iv(at(21), at(26))])
        );
    }

    #[tokio::test]
    async fn unavailable_weather_keeps_windows() {
        let sky = FakeSky::summer();
        let weather = CountingWeather::failing(503);

        let report = run(&sky, &weather).await;

        assert_eq!(weather.calls(), 1);
        assert_eq!(
            report.ranges,
            vec![
                WeatherRange::unknown(iv(at(21), at(23))),
                WeatherRange::unknown(iv(at_min(24, 30), at(26))),
            ]
        );
        assert!(report.is_visible());
    }

    #[tokio::test]
    async fn bad_weather_all_night_is_not_visible() {
        let sky = FakeSky::summer();
        let weather = CountingWeather::with((21..26).map(|h| clear(h, 90.0)).collect());

        let report = run(&sky, &weather).await;

        assert!(matches!(report.composition, Composition::Visible(_)));
        assert!(report.ranges.is_empty());
        assert!(!report.is_visible());
    }
}
