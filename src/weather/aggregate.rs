//! Folding an hourly sample series into contiguous acceptable ranges.

use chrono::{DateTime, Utc};

use super::{ConditionThresholds, WeatherRange, WeatherSample};
use crate::interval::TimeInterval;

/// Running sums of the currently open run of acceptable samples.
#[derive(Debug, Default)]
struct OpenRun {
    first: Option<DateTime<Utc>>,
    len: usize,
    cloud_cover_sum: f64,
    precipitation_sum: f64,
}

impl OpenRun {
    fn push(&mut self, sample: &WeatherSample) {
        self.first.get_or_insert(sample.time);
        self.len += 1;
        // Unknown metrics contribute nothing to the sum but still count.
        self.cloud_cover_sum += sample.cloud_cover.unwrap_or(0.0);
        self.precipitation_sum += sample.precipitation_probability.unwrap_or(0.0);
    }

    /// Closes the run at `until` and resets it.
    fn close(&mut self, until: DateTime<Utc>) -> Option<WeatherRange> {
        let run = std::mem::take(self);
        let first = run.first?;

        let interval = match TimeInterval::new(first, until) {
            Ok(interval) => interval,
            Err(err) => {
                tracing::debug!(%err, "dropping zero-width weather run");
                return None;
            }
        };

        let len = run.len as f64;
        Some(WeatherRange {
            interval,
            cloud_cover: Some(run.cloud_cover_sum / len),
            precipitation_probability: Some(run.precipitation_sum / len),
        })
    }
}

/// Aggregates time-ordered `samples` into ranges of acceptable conditions.
///
/// Samples later than `bound.end` are dropped: services may report at a
/// coarser granularity than the requested window. A sample failing
/// `thresholds` closes the open run at its own time and belongs to no run.
/// A run still open after the scan closes at `bound.end`.
///
/// Each range carries the arithmetic mean of its run's metrics, where an
/// unknown metric counts as 0 but still counts towards the run length.
///
/// Callers with no samples at all should use [`WeatherRange::unknown`] over
/// `bound` instead of calling this.
pub fn aggregate(
    samples: &[WeatherSample],
    bound: &TimeInterval,
    thresholds: &ConditionThresholds,
) -> Vec<WeatherRange> {
    let mut result = Vec::new();
    let mut run = OpenRun::default();

    for sample in samples.iter().filter(|s| s.time <= bound.end()) {
        if thresholds.accepts(sample) {
            run.push(sample);
        } else {
            result.extend(run.close(sample.time));
        }
    }
    result.extend(run.close(bound.end()));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 10, hour, minute, 0).unwrap()
    }

    fn sample(hour: u32, minute: u32, cloud: Option<f64>, rain: Option<f64>) -> WeatherSample {
        WeatherSample::new(at(hour, minute), cloud, rain)
    }

    fn bound() -> TimeInterval {
        TimeInterval::new(at(20, 15), at(22, 0)).unwrap()
    }

    fn hourly(cloud: [f64; 3], rain: [f64; 3]) -> Vec<WeatherSample> {
        (0..3)
            .map(|i| sample(20 + i as u32, 15, Some(cloud[i]), Some(rain[i])))
            .collect()
    }

    #[test]
    fn averages_run_and_drops_samples_past_bound() {
        let samples = hourly([5.0, 10.0, 15.0], [10.0, 20.0, 30.0]);
        let result = aggregate(&samples, &bound(), &ConditionThresholds::new(100.0, 100.0));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].interval, bound());
        assert_eq!(result[0].cloud_cover, Some(7.5));
        assert_eq!(result[0].precipitation_probability, Some(15.0));
    }

    #[test]
    fn failing_sample_closes_run_at_its_own_time() {
        let samples = vec![
            sample(20, 0, Some(5.0), Some(0.0)),
            sample(21, 0, Some(90.0), Some(0.0)),
            sample(22, 0, Some(10.0), Some(0.0)),
        ];
        let bound = TimeInterval::new(at(20, 0), at(23, 30)).unwrap();
        let result = aggregate(&samples, &bound, &ConditionThresholds::new(30.0, 30.0));

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].interval, TimeInterval::new(at(20, 0), at(21, 0)).unwrap());
        assert_eq!(result[0].cloud_cover, Some(5.0));
        assert_eq!(result[1].interval, TimeInterval::new(at(22, 0), at(23, 30)).unwrap());
        assert_eq!(result[1].cloud_cover, Some(10.0));
    }

    #[test]
    fn thresholds_are_exclusive() {
        let samples = vec![sample(20, 15, Some(30.0), Some(0.0))];
        let result = aggregate(&samples, &bound(), &ConditionThresholds::new(30.0, 30.0));
        assert!(result.is_empty());
    }

    #[test]
    fn precipitation_alone_can_fail_a_sample() {
        let samples = vec![
            sample(20, 15, Some(0.0), Some(0.0)),
            sample(21, 15, Some(0.0), Some(80.0)),
        ];
        let result = aggregate(&samples, &bound(), &ConditionThresholds::new(30.0, 30.0));
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].interval,
            TimeInterval::new(at(20, 15), at(21, 15)).unwrap()
        );
    }

    #[test]
    fn consecutive_failures_emit_nothing_between_them() {
        let samples = vec![
            sample(20, 15, Some(90.0), Some(0.0)),
            sample(21, 15, Some(95.0), Some(0.0)),
        ];
        let result = aggregate(&samples, &bound(), &ConditionThresholds::new(30.0, 30.0));
        assert!(result.is_empty());
    }

    #[test]
    fn unknown_metrics_are_acceptable_and_count_as_zero() {
        let samples = vec![
            sample(20, 15, Some(5.0), Some(10.0)),
            sample(21, 15, None, Some(90.0)),
        ];
        let result = aggregate(&samples, &bound(), &ConditionThresholds::new(30.0, 30.0));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].interval, bound());
        assert_eq!(result[0].cloud_cover, Some(2.5));
        assert_eq!(result[0].precipitation_probability, Some(50.0));
    }

    #[test]
    fn sample_exactly_at_bound_end_does_not_produce_empty_range() {
        let samples = vec![
            sample(20, 15, Some(90.0), Some(0.0)),
            sample(22, 0, Some(5.0), Some(0.0)),
        ];
        let result = aggregate(&samples, &bound(), &ConditionThresholds::new(30.0, 30.0));
        assert!(result.is_empty());
    }

    #[test]
    fn no_samples_yield_no_ranges() {
        let result = aggregate(&[], &bound(), &ConditionThresholds::new(30.0, 30.0));
        assert!(result.is_empty());
    }
}
