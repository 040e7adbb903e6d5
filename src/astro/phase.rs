use std::fmt;

use serde::Serialize;

/// Named lunar phase derived from the Moon − Sun ecliptic longitude.
///
/// The four principal phases only match their exact angle; everything in
/// between is one of the intermediate phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub fn from_angle(degrees: f64) -> Self {
        match degrees {
            d if d == 0.0 => MoonPhase::NewMoon,
            d if d > 0.0 && d < 90.0 => MoonPhase::WaxingCrescent,
            d if d == 90.0 => MoonPhase::FirstQuarter,
            d if d > 90.0 && d < 180.0 => MoonPhase::WaxingGibbous,
            d if d == 180.0 => MoonPhase::FullMoon,
            d if d > 180.0 && d < 270.0 => MoonPhase::WaningGibbous,
            d if d == 270.0 => MoonPhase::ThirdQuarter,
            _ => MoonPhase::WaningCrescent,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::ThirdQuarter => "Third Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
