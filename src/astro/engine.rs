//! Built-in [`Astronomy`] implementation backed by the low-precision series.

use chrono::{DateTime, Duration, Utc};
use qtty::Degrees;

use super::ephemeris::{
    altitude, moon_illuminated_fraction, moon_phase_angle, moon_position, refraction,
    sun_position, Equatorial,
};
use super::search::{find_crossing, Direction};
use super::{Astronomy, MoonData, MoonPhase, Site, Target};
use crate::interval::TimeInterval;

/// Altitude of a point source's centre at apparent rise/set, allowing for
/// standard refraction at the horizon.
const STAR_RISE_ALTITUDE: f64 = -0.5667;

/// Sun altitude at the end of nautical twilight.
const NAUTICAL_TWILIGHT: f64 = -12.0;

/// Sun altitude at the end of astronomical twilight.
const ASTRONOMICAL_TWILIGHT: f64 = -18.0;

/// How far ahead any single event is searched.
fn search_limit() -> Duration {
    Duration::days(1)
}

/// Ephemeris for one observer and one fixed target.
#[derive(Debug, Clone)]
pub struct Ephemeris {
    site: Site,
    target: Target,
}

impl Ephemeris {
    pub fn new(site: Site, target: Target) -> Self {
        Self { site, target }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    fn altitude_of(&self, position: Equatorial, at: DateTime<Utc>) -> f64 {
        altitude(
            position,
            self.site.latitude().value(),
            self.site.longitude().value(),
            at,
        )
    }

    /// Geometric altitude of the target. Catalogue coordinates are used
    /// without precession.
    fn target_altitude(&self, at: DateTime<Utc>) -> f64 {
        let position = Equatorial {
            right_ascension: self.target.right_ascension().value(),
            declination: self.target.declination().value(),
        };
        self.altitude_of(position, at)
    }

    fn sun_altitude(&self, at: DateTime<Utc>) -> f64 {
        self.altitude_of(sun_position(at).equatorial, at)
    }

    /// Geocentric Moon altitude relative to its rise/set altitude, which
    /// depends on the horizontal parallax at `at`.
    fn moon_above_horizon(&self, at: DateTime<Utc>) -> f64 {
        let moon = moon_position(at);
        let rise_altitude = 0.7275 * moon.parallax + STAR_RISE_ALTITUDE;
        self.altitude_of(moon.equatorial, at) - rise_altitude
    }

    fn moonrise(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        find_crossing(
            |t| self.moon_above_horizon(t),
            Direction::Rising,
            reference,
            search_limit(),
        )
    }

    /// From the first rise of `f` through zero after `reference` to the
    /// first fall of `g` through zero after that.
    fn window<F, G>(&self, reference: DateTime<Utc>, f: F, g: G) -> Option<TimeInterval>
    where
        F: Fn(DateTime<Utc>) -> f64,
        G: Fn(DateTime<Utc>) -> f64,
    {
        let open = find_crossing(f, Direction::Rising, reference, search_limit())?;
        let close = find_crossing(g, Direction::Setting, open, search_limit())?;
        TimeInterval::new(open, close).ok()
    }
}

impl Astronomy for Ephemeris {
    fn target_name(&self) -> &str {
        self.target.name()
    }

    fn target_window(&self, reference: DateTime<Utc>) -> Option<TimeInterval> {
        let above = |t| self.target_altitude(t) - STAR_RISE_ALTITUDE;
        self.window(reference, above, above)
    }

    fn twilight_window(&self, reference: DateTime<Utc>) -> Option<TimeInterval> {
        self.window(
            reference,
            |t| self.sun_altitude(t) - NAUTICAL_TWILIGHT,
            |t| self.sun_altitude(t) - ASTRONOMICAL_TWILIGHT,
        )
    }

    fn moon_window(&self, reference: DateTime<Utc>) -> Option<TimeInterval> {
        let rise = self.moonrise(reference)?;
        let set = find_crossing(
            |t| self.moon_above_horizon(t),
            Direction::Setting,
            rise,
            search_limit(),
        )?;
        TimeInterval::new(rise, set).ok()
    }

    fn moon(&self, reference: DateTime<Utc>) -> MoonData {
        let angle = moon_phase_angle(reference);
        let lit_at = self.moonrise(reference).unwrap_or(reference);
        MoonData {
            phase_angle: Degrees::new(angle),
            phase: MoonPhase::from_angle(angle),
            illumination: moon_illuminated_fraction(lit_at) * 100.0,
        }
    }

    fn target_elevation(&self, at: DateTime<Utc>) -> Degrees {
        let geometric = self.target_altitude(at);
        Degrees::new(geometric + refraction(geometric))
    }
}
