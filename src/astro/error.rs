use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("Invalid latitude {0}. Must be between -90 and 90")]
    Latitude(f64),

    #[error("Invalid longitude {0}. Must be between -180 and 180")]
    Longitude(f64),

    #[error("Invalid height {0}. Must be a finite number of metres")]
    Height(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_display() {
        let e = SiteError::Latitude(91.0);
        assert_eq!(e.to_string(), "Invalid latitude 91. Must be between -90 and 90");
    }

    #[test]
    fn longitude_display() {
        let e = SiteError::Longitude(-200.5);
        assert_eq!(
            e.to_string(),
            "Invalid longitude -200.5. Must be between -180 and 180"
        );
    }
}
