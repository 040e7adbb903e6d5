//! Low-precision Sun and Moon positions and horizontal coordinates.
//!
//! Series from the Astronomical Almanac "low precision" formulae: about
//! 0.01° for the Sun and 0.3° for the Moon between 1950 and 2050, which is
//! plenty for minute-level rise/set times. Angles are in degrees throughout.

use chrono::{DateTime, Utc};

use super::time::{days_since_j2000, gmst_deg};

/// Mean Earth-Sun distance in km.
const SUN_DISTANCE_KM: f64 = 149_597_870.7;

/// Equatorial Earth radius in km.
const EARTH_RADIUS_KM: f64 = 6_378.14;

fn sin_d(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cos_d(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Equatorial coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Geocentric position of a solar-system body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub ecliptic_longitude: f64,
    pub ecliptic_latitude: f64,
    pub equatorial: Equatorial,
    /// Equatorial horizontal parallax.
    pub parallax: f64,
}

fn obliquity(d: f64) -> f64 {
    23.439 - 0.000_000_4 * d
}

fn ecliptic_to_equatorial(longitude: f64, latitude: f64, epsilon: f64) -> Equatorial {
    let (sin_l, cos_l) = (sin_d(longitude), cos_d(longitude));
    let (sin_b, cos_b) = (sin_d(latitude), cos_d(latitude));
    let (sin_e, cos_e) = (sin_d(epsilon), cos_d(epsilon));

    let ra = (sin_l * cos_e - sin_b / cos_b * sin_e)
        .atan2(cos_l)
        .to_degrees()
        .rem_euclid(360.0);
    let dec = (sin_b * cos_e + cos_b * sin_e * sin_l).asin().to_degrees();

    Equatorial {
        right_ascension: ra,
        declination: dec,
    }
}

/// Geocentric apparent position of the Sun.
pub fn sun_position(at: DateTime<Utc>) -> BodyPosition {
    let d = days_since_j2000(at);
    let mean_longitude = 280.460 + 0.985_647_4 * d;
    let mean_anomaly = 357.528 + 0.985_600_3 * d;
    let longitude = (mean_longitude
        + 1.915 * sin_d(mean_anomaly)
        + 0.020 * sin_d(2.0 * mean_anomaly))
    .rem_euclid(360.0);

    BodyPosition {
        ecliptic_longitude: longitude,
        ecliptic_latitude: 0.0,
        equatorial: ecliptic_to_equatorial(longitude, 0.0, obliquity(d)),
        parallax: (EARTH_RADIUS_KM / SUN_DISTANCE_KM).asin().to_degrees(),
    }
}

/// Geocentric position of the Moon.
pub fn moon_position(at: DateTime<Utc>) -> BodyPosition {
    let d = days_since_j2000(at);
    let t = d / 36_525.0;

    let longitude = (218.32 + 481_267.881 * t
        + 6.29 * sin_d(135.0 + 477_198.87 * t)
        - 1.27 * sin_d(259.3 - 413_335.36 * t)
        + 0.66 * sin_d(235.7 + 890_534.22 * t)
        + 0.21 * sin_d(269.9 + 954_397.74 * t)
        - 0.19 * sin_d(357.5 + 35_999.05 * t)
        - 0.11 * sin_d(186.5 + 966_404.03 * t))
    .rem_euclid(360.0);

    let latitude = 5.13 * sin_d(93.3 + 483_202.02 * t)
        + 0.28 * sin_d(228.2 + 960_400.89 * t)
        - 0.28 * sin_d(318.3 + 6_003.15 * t)
        - 0.17 * sin_d(217.6 - 407_332.21 * t);

    let parallax = 0.9508
        + 0.0518 * cos_d(135.0 + 477_198.87 * t)
        + 0.0095 * cos_d(259.3 - 413_335.36 * t)
        + 0.0078 * cos_d(235.7 + 890_534.22 * t)
        + 0.0028 * cos_d(269.9 + 954_397.74 * t);

    BodyPosition {
        ecliptic_longitude: longitude,
        ecliptic_latitude: latitude,
        equatorial: ecliptic_to_equatorial(longitude, latitude, obliquity(d)),
        parallax,
    }
}

/// Geometric altitude above the horizon of a position at `at`.
pub fn altitude(position: Equatorial, latitude: f64, longitude: f64, at: DateTime<Utc>) -> f64 {
    let hour_angle = gmst_deg(at) + longitude - position.right_ascension;
    let sin_alt = sin_d(latitude) * sin_d(position.declination)
        + cos_d(latitude) * cos_d(position.declination) * cos_d(hour_angle);
    sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Atmospheric refraction for a geometric altitude, in degrees.
///
/// Sæmundsson's formula, standard pressure and temperature. Zero well below
/// the horizon where it is meaningless.
pub fn refraction(altitude: f64) -> f64 {
    if altitude < -1.0 {
        return 0.0;
    }
    let arcmin = 1.02 / (altitude + 10.3 / (altitude + 5.11)).to_radians().tan();
    arcmin.max(0.0) / 60.0
}

/// Moon − Sun geocentric ecliptic longitude, in `[0, 360)`.
///
/// 0° is new moon, 90° first quarter, 180° full moon, 270° third quarter.
pub fn moon_phase_angle(at: DateTime<Utc>) -> f64 {
    let moon = moon_position(at);
    let sun = sun_position(at);
    (moon.ecliptic_longitude - sun.ecliptic_longitude).rem_euclid(360.0)
}

/// Illuminated fraction of the lunar disk, in `[0, 1]`.
pub fn moon_illuminated_fraction(at: DateTime<Utc>) -> f64 {
    let moon = moon_position(at);
    let sun = sun_position(at);

    let cos_elongation = cos_d(moon.ecliptic_latitude)
        * cos_d(moon.ecliptic_longitude - sun.ecliptic_longitude);
    let elongation = cos_elongation.clamp(-1.0, 1.0).acos();
    let moon_distance = EARTH_RADIUS_KM / sin_d(moon.parallax);

    let phase_angle = (SUN_DISTANCE_KM * elongation.sin())
        .atan2(moon_distance - SUN_DISTANCE_KM * elongation.cos());
    (1.0 + phase_angle.cos()) / 2.0
}
