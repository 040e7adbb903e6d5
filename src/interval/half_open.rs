//! Half-open time range with subtraction.

use std::fmt::{self, Debug, Display};

use chrono::{DateTime, Duration, Utc};

use super::error::IntervalError;

/// Anything usable as an interval endpoint: totally ordered and cheap to copy.
pub trait Endpoint: Ord + Copy + Debug {}

impl<T: Ord + Copy + Debug> Endpoint for T {}

/// Half-open range `[start, end)` with `end` strictly after `start`.
///
/// Intervals are immutable once built. Every operation that "changes" an
/// interval returns fresh values, and the only way to obtain one is through
/// [`Interval::new`], so the non-empty invariant holds everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

/// Interval over UTC instants, the shape every collaborator speaks.
pub type TimeInterval = Interval<DateTime<Utc>>;

impl<T: Endpoint> Interval<T> {
    /// Creates interval `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidInterval`] if `end <= start`. The
    /// endpoints are never swapped to make the call succeed.
    pub fn new(start: T, end: T) -> Result<Self, IntervalError> {
        if end <= start {
            return Err(IntervalError::InvalidInterval {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            });
        }
        Ok(Self { start, end })
    }

    /// Builds `[start, end)` only when it is non-empty.
    fn piece(start: T, end: T) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    /// Returns true if `instant` ∈ `[start, end)`.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns true if the two ranges share at least one instant.
    ///
    /// Back-to-back intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Common part of both ranges, if any.
    pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
        Self::piece(self.start.max(other.start), self.end.min(other.end))
    }

    /// Removes the part of `self` covered by `other`.
    ///
    /// | `other` relative to `self` | result |
    /// |---|---|
    /// | disjoint or touching | `[self]` |
    /// | overlaps the left edge | `[other.end, self.end)` |
    /// | overlaps the right edge | `[self.start, other.start)` |
    /// | covers it entirely | `[]` |
    /// | strictly inside | `[self.start, other.start)`, `[other.end, self.end)` |
    ///
    /// Pieces that would be empty are not produced, so a subtrahend that
    /// shares a boundary with `self` yields fewer pieces.
    pub fn subtract_one(&self, other: &Interval<T>) -> Vec<Interval<T>> {
        if other.end <= self.start || other.start >= self.end {
            return vec![*self];
        }

        let left = Self::piece(self.start, other.start);
        let right = Self::piece(other.end, self.end);
        left.into_iter().chain(right).collect()
    }

    /// Subtracts every interval of `others`, in order.
    ///
    /// Each subtrahend is applied to the whole working set left by the
    /// previous ones, starting from `[self]`. The working set is rebuilt for
    /// every subtrahend rather than edited in place. Pieces keep their
    /// relative order, so the result is ascending.
    ///
    /// For mutually disjoint subtrahends the result does not depend on their
    /// order. Overlapping subtrahends are folded one after the other exactly
    /// the same way; no union is taken beforehand.
    pub fn subtract<'a, I>(&self, others: I) -> Vec<Interval<T>>
    where
        I: IntoIterator<Item = &'a Interval<T>>,
        T: 'a,
    {
        others.into_iter().fold(vec![*self], |working, other| {
            working
                .iter()
                .flat_map(|piece| piece.subtract_one(other))
                .collect()
        })
    }
}

impl TimeInterval {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T: serde::Serialize> serde::Serialize for Interval<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}
