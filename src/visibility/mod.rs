//! Composition of astronomical and weather windows into a night's report.

mod compose;
mod config;
mod error;
mod finder;
mod report;

#[cfg(test)]
mod tests;

pub use compose::{attach_to_windows, compose, Composition};
pub use config::VisibilityConfig;
pub use error::VisibilityError;
pub use finder::{find_visibility, start_of_day};
pub use report::VisibilityReport;
