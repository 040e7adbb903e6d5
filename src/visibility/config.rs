//! Thresholds applied to a visibility computation.

use crate::weather::ConditionThresholds;

/// User-tunable limits, all in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    // --- Weather ---
    /// Cloud cover must stay strictly below this.
    pub cloud_threshold: f64,
    /// Precipitation probability must stay strictly below this.
    pub precipitation_threshold: f64,

    // --- Moon ---
    /// The Moon only excludes time when its illumination exceeds this.
    pub moon_threshold: f64,
}

impl VisibilityConfig {
    pub fn thresholds(&self) -> ConditionThresholds {
        ConditionThresholds::new(self.cloud_threshold, self.precipitation_threshold)
    }

    /// Whether a Moon lit to `illumination` percent washes out the sky.
    pub fn moon_interferes(&self, illumination: f64) -> bool {
        illumination > self.moon_threshold
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            cloud_threshold: 30.0,
            precipitation_threshold: 30.0,
            moon_threshold: 50.0,
        }
    }
}
