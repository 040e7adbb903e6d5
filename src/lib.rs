//! gcvis - when is the Galactic Center observable tonight?
//!
//! Combines the rise/set window of a fixed target with twilight, moonlight
//! and hourly weather into the parts of a night worth going out for.
//!
//! The pipeline is:
//! - [`astro`] supplies the target, twilight and Moon windows,
//! - [`visibility`] subtracts the unavailable ones using [`interval`] arithmetic,
//! - [`weather`] folds an hourly forecast over what is left,
//! - [`render`] turns the resulting report into text, JSON or ICS.

pub mod astro;
pub mod interval;
pub mod render;
pub mod visibility;
pub mod weather;

pub use astro::{Astronomy, Ephemeris, Site, Target};
pub use interval::{Interval, TimeInterval};
pub use visibility::{find_visibility, VisibilityConfig, VisibilityReport};
