use chrono::NaiveDate;
use qtty::Degrees;

use super::Composition;
use crate::astro::MoonData;
use crate::weather::WeatherRange;

/// Everything known about one night at one site, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityReport {
    /// Local calendar date the night starts on.
    pub date: NaiveDate,
    pub target: String,
    pub composition: Composition,
    /// Weather-acceptable parts of the visible windows.
    pub ranges: Vec<WeatherRange>,
    /// Target altitude at the first visible instant, 0 when not visible.
    pub elevation: Degrees,
    pub moon: MoonData,
}

impl VisibilityReport {
    /// The target can be observed at least once that night.
    pub fn is_visible(&self) -> bool {
        !self.ranges.is_empty()
    }
}
