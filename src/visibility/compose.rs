//! Subtracting unavailability windows from the target's base window.

use crate::interval::{intersect_sorted, TimeInterval};
use crate::weather::WeatherRange;

/// Result of composing the astronomical windows of one night.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// The target does not rise and set within the searched day.
    NoWindow,
    /// The target is up, but daylight or moonlight cover all of it.
    FullyExcluded,
    /// Ascending, disjoint sub-intervals in which the target is observable.
    Visible(Vec<TimeInterval>),
}

impl Composition {
    /// Visible sub-intervals; empty unless [`Composition::Visible`].
    pub fn windows(&self) -> &[TimeInterval] {
        match self {
            Composition::Visible(windows) => windows,
            Composition::NoWindow | Composition::FullyExcluded => &[],
        }
    }
}

/// Removes every present exclusion from `base`, in the given order.
///
/// Absent exclusions are skipped. An absent `base` is reported as
/// [`Composition::NoWindow`] without subtracting anything, which keeps it
/// apart from a window that exists but is completely excluded.
pub fn compose(base: Option<TimeInterval>, exclusions: &[Option<TimeInterval>]) -> Composition {
    let Some(base) = base else {
        tracing::debug!("target has no rise/set window");
        return Composition::NoWindow;
    };

    let remaining = base.subtract(exclusions.iter().flatten());
    tracing::debug!(%base, pieces = remaining.len(), "composed visibility window");

    if remaining.is_empty() {
        Composition::FullyExcluded
    } else {
        Composition::Visible(remaining)
    }
}

/// Restricts weather ranges to the visible sub-intervals.
///
/// A range spanning a gap is split; every piece keeps the metrics of the
/// range it came from. Both inputs must be ascending and disjoint.
pub fn attach_to_windows(ranges: &[WeatherRange], windows: &[TimeInterval]) -> Vec<WeatherRange> {
    ranges
        .iter()
        .flat_map(|range| {
            intersect_sorted(std::slice::from_ref(&range.interval), windows)
                .into_iter()
                .map(move |piece| range.with_interval(piece))
        })
        .collect()
}
