//! Observer location and catalogue target.

use qtty::{Degrees, Meters};

use super::error::SiteError;

/// Geographic position of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    latitude: Degrees,
    longitude: Degrees,
    height: Meters,
}

impl Site {
    /// Creates a site from degrees north, degrees east and metres above sea level.
    ///
    /// # Errors
    ///
    /// Latitude must lie in `[-90, 90]`, longitude in `[-180, 180]`, and all
    /// three values must be finite.
    pub fn new(latitude: f64, longitude: f64, height_m: f64) -> Result<Self, SiteError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SiteError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SiteError::Longitude(longitude));
        }
        if !height_m.is_finite() {
            return Err(SiteError::Height(height_m));
        }
        Ok(Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
            height: Meters::new(height_m),
        })
    }

    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    pub fn height(&self) -> Meters {
        self.height
    }
}

/// Fixed celestial object given by its J2000 equatorial coordinates.
///
/// Handed to the ephemeris at construction time; nothing is registered
/// globally.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    name: String,
    right_ascension: Degrees,
    declination: Degrees,
}

impl Target {
    pub fn new(name: impl Into<String>, right_ascension: Degrees, declination: Degrees) -> Self {
        Self {
            name: name.into(),
            right_ascension,
            declination,
        }
    }

    /// Builds a target from sexagesimal right ascension (h, m, s) and
    /// declination (sign, d, m, s).
    pub fn from_sexagesimal(
        name: impl Into<String>,
        ra: (f64, f64, f64),
        dec_negative: bool,
        dec: (f64, f64, f64),
    ) -> Self {
        let ra_hours = ra.0 + ra.1 / 60.0 + ra.2 / 3600.0;
        let dec_abs = dec.0 + dec.1 / 60.0 + dec.2 / 3600.0;
        let dec_deg = if dec_negative { -dec_abs } else { dec_abs };
        Self::new(name, Degrees::new(ra_hours * 15.0), Degrees::new(dec_deg))
    }

    /// Sagittarius A*, the centre of the Milky Way.
    pub fn galactic_center() -> Self {
        Self::from_sexagesimal(
            "Galactic Center",
            (17.0, 45.0, 40.0409),
            true,
            (29.0, 0.0, 28.118),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn right_ascension(&self) -> Degrees {
        self.right_ascension
    }

    pub fn declination(&self) -> Degrees {
        self.declination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_site() {
        let site = Site::new(50.11, 8.68, 200.0).unwrap();
        assert_eq!(site.latitude().value(), 50.11);
        assert_eq!(site.longitude().value(), 8.68);
        assert_eq!(site.height().value(), 200.0);
    }

    #[test]
    fn accepts_boundaries() {
        assert!(Site::new(-90.0, -180.0, 0.0).is_ok());
        assert!(Site::new(90.0, 180.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(Site::new(90.5, 0.0, 0.0), Err(SiteError::Latitude(90.5)));
        assert_eq!(Site::new(0.0, -181.0, 0.0), Err(SiteError::Longitude(-181.0)));
        assert!(matches!(
            Site::new(f64::NAN, 0.0, 0.0),
            Err(SiteError::Latitude(_))
        ));
        assert!(matches!(
            Site::new(0.0, 0.0, f64::INFINITY),
            Err(SiteError::Height(_))
        ));
    }

    #[test]
    fn galactic_center_coordinates() {
        let gc = Target::galactic_center();
        assert_eq!(gc.name(), "Galactic Center");
        assert!((gc.right_ascension().value() - 266.41684).abs() < 1e-4);
        assert!((gc.declination().value() + 29.00781).abs() < 1e-4);
    }
}
