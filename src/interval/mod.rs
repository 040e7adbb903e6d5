//! Half-open time intervals and the subtraction engine built on them.
//!
//! [`Interval`] is generic over its endpoint so the arithmetic can be tested
//! with plain integers; the rest of the crate works with [`TimeInterval`].

mod error;
mod half_open;
mod operations;


pub use error::IntervalError;
pub use half_open::{Endpoint, Interval, TimeInterval};
pub use operations::{intersect_sorted, is_ascending};
