//! Julian dates and sidereal time.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of a UTC instant.
///
/// UT and TT are not distinguished; the ~70 s offset is far below the
/// accuracy of the series used here.
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    at.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Days since J2000.0.
pub fn days_since_j2000(at: DateTime<Utc>) -> f64 {
    julian_day(at) - J2000_JD
}

/// Greenwich Mean Sidereal Time in degrees, in `[0, 360)`.
///
/// GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T²
///
/// Source: Meeus, Astronomical Algorithms, eq. 12.4.
pub fn gmst_deg(at: DateTime<Utc>) -> f64 {
    let d = days_since_j2000(at);
    let t = d / 36_525.0;
    (280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t).rem_euclid(360.0)
}
