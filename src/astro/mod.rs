//! Astronomical windows for one observer: target rise/set, twilight and Moon.
//!
//! The visibility engine only depends on the [`Astronomy`] trait; [`Ephemeris`]
//! is the built-in implementation.

mod engine;
mod ephemeris;
mod error;
mod phase;
mod search;
mod site;
mod time;

pub use engine::Ephemeris;
pub use error::SiteError;
pub use phase::MoonPhase;
pub use site::{Site, Target};

use chrono::{DateTime, Utc};
use qtty::Degrees;

use crate::interval::TimeInterval;

/// Lunar conditions for a night.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonData {
    /// Moon − Sun ecliptic longitude in `[0, 360)`.
    pub phase_angle: Degrees,
    pub phase: MoonPhase,
    /// Illuminated fraction of the disk, in percent.
    pub illumination: f64,
}

/// Source of the astronomical windows a visibility computation needs.
///
/// `None` is a valid answer, not a failure: the body does not rise, or the
/// Sun never reaches the requested depression, within a day of `reference`.
pub trait Astronomy {
    /// Display name of the observed target.
    fn target_name(&self) -> &str;

    /// First rise of the target after `reference` until its following set.
    fn target_window(&self, reference: DateTime<Utc>) -> Option<TimeInterval>;

    /// Bright-sky window: from the Sun climbing through −12° after
    /// `reference` to it sinking through −18° after that.
    fn twilight_window(&self, reference: DateTime<Utc>) -> Option<TimeInterval>;

    /// First moonrise after `reference` until the following moonset.
    fn moon_window(&self, reference: DateTime<Utc>) -> Option<TimeInterval>;

    /// Phase at `reference` and illumination at the next moonrise, or at
    /// `reference` when the Moon does not rise.
    fn moon(&self, reference: DateTime<Utc>) -> MoonData;

    /// Apparent altitude of the target, including refraction.
    fn target_elevation(&self, at: DateTime<Utc>) -> Degrees;
}
