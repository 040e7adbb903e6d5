//! Horizon-crossing search.
//!
//! Coarse scan of a continuous altitude function followed by bisection of the
//! bracketing step. The altitude function is expected to have been shifted
//! so that the threshold of interest sits at zero.

use chrono::{DateTime, Duration, Utc};

/// Coarse scan step. Short enough that no rise and set of the same body
/// fit inside one step at the latitudes we accept.
const SCAN_STEP_MINUTES: i64 = 10;

/// Bisection stops once the bracket is this narrow.
const TOLERANCE_MS: i64 = 1_000;

/// Which way the function crosses zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From below to at-or-above zero.
    Rising,
    /// From at-or-above zero to below.
    Setting,
}

impl Direction {
    fn matches(self, before: f64, after: f64) -> bool {
        match self {
            Direction::Rising => before < 0.0 && after >= 0.0,
            Direction::Setting => before >= 0.0 && after < 0.0,
        }
    }
}

/// First `direction` crossing of `f` in `(start, start + limit]`.
///
/// Returns the earliest instant at which the function is on the far side of
/// zero, to within one second.
pub fn find_crossing<F>(
    f: F,
    direction: Direction,
    start: DateTime<Utc>,
    limit: Duration,
) -> Option<DateTime<Utc>>
where
    F: Fn(DateTime<Utc>) -> f64,
{
    let step = Duration::minutes(SCAN_STEP_MINUTES);
    let end = start + limit;

    let mut lo = start;
    let mut f_lo = f(lo);
    while lo < end {
        let hi = (lo + step).min(end);
        let f_hi = f(hi);
        if direction.matches(f_lo, f_hi) {
            return Some(bisect(&f, direction, lo, hi));
        }
        lo = hi;
        f_lo = f_hi;
    }
    None
}

fn bisect<F>(f: &F, direction: Direction, mut lo: DateTime<Utc>, mut hi: DateTime<Utc>) -> DateTime<Utc>
where
    F: Fn(DateTime<Utc>) -> f64,
{
    let tolerance = Duration::milliseconds(TOLERANCE_MS);
    while hi - lo > tolerance {
        let mid = lo + (hi - lo) / 2;
        let past = match direction {
            Direction::Rising => f(mid) >= 0.0,
            Direction::Setting => f(mid) < 0.0,
        };
        if past {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi
}
