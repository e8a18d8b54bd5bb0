//! # Suntrack: altitude and azimuth of the Sun and of fixed stars
//!
//! This module is the façade of the crate. Every location query runs the same pipeline:
//!
//! 1. [`CalendarDate`] → MJD → JD → Julian centuries since J2000 ([`crate::time`]).
//! 2. Equatorial coordinates of the body: the solar ephemeris ([`sun_position`]), the
//!    built-in [`SIRIUS`] constant, or a named entry of a [`StarCatalog`].
//! 3. Local mean sidereal time at the observer longitude, giving the hour angle
//!    `τ = 15·(LMST − α)` in degrees.
//! 4. Equatorial → horizon transformation ([`LocalEquatorial::to_horizon`]).
//!
//! ## Conventions
//!
//! - Latitude is in signed degrees, north positive.
//! - Longitude is in signed degrees, **west positive**: it is subtracted from the Greenwich
//!   sidereal time (Somerset, NJ is `+74.5`).
//! - Azimuths are returned in `[0, 360)`.
//!
//! ## Typical usage
//!
//! ```rust
//! use suntrack::suntrack::Suntrack;
//! use suntrack::time::CalendarDate;
//!
//! let mut tracker = Suntrack::new();
//! tracker.register_star("vega", 38.784, 18.616);
//!
//! let date = CalendarDate::new(2012, 9, 7, 19, 0, 0.0);
//! let sun = tracker.sun_location(&date, 40.5, 74.5);
//! let vega = tracker.star_location("vega", &date, 40.5, 74.5).unwrap();
//! println!("sun: {sun}, vega: {vega}");
//! ```
use std::path::Path;

use crate::constants::{Degree, Hour};
use crate::coordinates::horizon::{EquatorialPosition, HorizonPosition, LocalEquatorial};
use crate::conversion::hours_to_degrees;
use crate::stars::{StarCatalog, SIRIUS};
use crate::sun::sun_position;
use crate::suntrack_errors::SuntrackError;
use crate::time::{julian_centuries_since_j2000, lmst, mjd_to_jd, to_mjd, CalendarDate};

/// Horizon coordinates of a body with the given equatorial position.
fn locate(
    body: &EquatorialPosition,
    date: &CalendarDate,
    latitude: Degree,
    longitude: Degree,
) -> HorizonPosition {
    let mjd = to_mjd(date);
    let sidereal: Hour = lmst(mjd, longitude);
    let hour_angle = hours_to_degrees(sidereal - body.right_ascension);

    log::debug!(
        "{date}: mjd={mjd} lmst={sidereal} dec={} ra={} tau={hour_angle}",
        body.declination,
        body.right_ascension
    );

    LocalEquatorial::new(body.declination, hour_angle, latitude)
        .to_horizon()
        .into()
}

/// Altitude and azimuth of the Sun.
///
/// Arguments
/// ---------
/// * `date`: UT instant of the observation
/// * `latitude`: observer latitude in degrees
/// * `longitude`: observer longitude in degrees, west positive
pub fn sun_location(date: &CalendarDate, latitude: Degree, longitude: Degree) -> HorizonPosition {
    let t = julian_centuries_since_j2000(mjd_to_jd(to_mjd(date)));
    locate(&sun_position(t), date, latitude, longitude)
}

/// Altitude and azimuth of Sirius.
pub fn sirius_location(
    date: &CalendarDate,
    latitude: Degree,
    longitude: Degree,
) -> HorizonPosition {
    locate(&SIRIUS, date, latitude, longitude)
}

/// Altitude and azimuth of a star of `catalog`.
///
/// Errors
/// ------
/// * [`SuntrackError::ConfigurationError`] if `name` has no declination or no right
///   ascension in `catalog`.
pub fn star_location(
    catalog: &StarCatalog,
    name: &str,
    date: &CalendarDate,
    latitude: Degree,
    longitude: Degree,
) -> Result<HorizonPosition, SuntrackError> {
    let star = catalog.position(name)?;
    Ok(locate(&star, date, latitude, longitude))
}

/// Location service owning its star registry.
#[derive(Debug, Clone, Default)]
pub struct Suntrack {
    catalog: StarCatalog,
}

impl Suntrack {
    /// Create a tracker with an empty star registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: StarCatalog) -> Self {
        Suntrack { catalog }
    }

    /// Create a tracker whose registry is read from a CSV star file.
    pub fn from_catalog_path<P: AsRef<Path>>(path: P) -> Result<Self, SuntrackError> {
        Ok(Self::with_catalog(StarCatalog::from_csv_path(path)?))
    }

    pub fn catalog(&self) -> &StarCatalog {
        &self.catalog
    }

    pub fn register_star(&mut self, name: &str, declination: Degree, right_ascension: Hour) {
        self.catalog.register(name, declination, right_ascension);
    }

    pub fn set_star_declination(&mut self, name: &str, declination: Degree) {
        self.catalog.set_declination(name, declination);
    }

    pub fn set_star_right_ascension(&mut self, name: &str, right_ascension: Hour) {
        self.catalog.set_right_ascension(name, right_ascension);
    }

    pub fn sun_location(
        &self,
        date: &CalendarDate,
        latitude: Degree,
        longitude: Degree,
    ) -> HorizonPosition {
        sun_location(date, latitude, longitude)
    }

    pub fn sirius_location(
        &self,
        date: &CalendarDate,
        latitude: Degree,
        longitude: Degree,
    ) -> HorizonPosition {
        sirius_location(date, latitude, longitude)
    }

    /// See [`star_location`].
    pub fn star_location(
        &self,
        name: &str,
        date: &CalendarDate,
        latitude: Degree,
        longitude: Degree,
    ) -> Result<HorizonPosition, SuntrackError> {
        star_location(&self.catalog, name, date, latitude, longitude)
    }
}

#[cfg(test)]
mod suntrack_test {
    use super::*;
    use approx::assert_relative_eq;

    const SOMERSET: (Degree, Degree) = (40.5, 74.5);

    #[test]
    fn test_sun_location_somerset() {
        let date = CalendarDate::new(2012, 9, 7, 19, 0, 0.0);
        let h = sun_location(&date, SOMERSET.0, SOMERSET.1);
        assert_relative_eq!(h.altitude, 45.45334988884862, epsilon = 1e-6);
        assert_relative_eq!(h.azimuth, 47.02642003803532, epsilon = 1e-6);
    }

    #[test]
    fn test_sirius_location_somerset() {
        let date = CalendarDate::new(2012, 1, 16, 0, 0, 0.0);
        let h = sirius_location(&date, SOMERSET.0, SOMERSET.1);
        assert_relative_eq!(h.altitude, 9.598339219242304, epsilon = 1e-6);
        assert_relative_eq!(h.azimuth, 238.10371974459065, epsilon = 1e-6);
    }

    #[test]
    fn test_sirius_is_a_registered_star() {
        let mut catalog = StarCatalog::new();
        catalog.register("sirius", SIRIUS.declination, SIRIUS.right_ascension);

        let date = CalendarDate::new(2012, 1, 16, 4, 0, 0.0);
        let from_catalog = star_location(&catalog, "sirius", &date, 40.5, 74.5).unwrap();
        assert_eq!(from_catalog, sirius_location(&date, 40.5, 74.5));
    }

    #[test]
    fn test_facade_star_location() {
        let mut tracker = Suntrack::new();
        tracker.set_star_declination("vega", 38.784);
        tracker.set_star_right_ascension("vega", 18.616);

        let date = CalendarDate::new(2012, 1, 16, 0, 0, 0.0);
        let h = tracker.star_location("vega", &date, 40.5, 74.5).unwrap();
        assert_relative_eq!(h.altitude, 5.773060114396993, epsilon = 1e-6);
        assert_relative_eq!(h.azimuth, 222.13186097487795, epsilon = 1e-6);
    }

    #[test]
    fn test_facade_unknown_star_leaves_catalog_untouched() {
        let tracker = Suntrack::with_catalog(StarCatalog::new());
        let date = CalendarDate::new(2012, 1, 16, 0, 0, 0.0);

        let result = tracker.star_location("deneb", &date, 40.5, 74.5);
        assert!(matches!(result, Err(SuntrackError::ConfigurationError(_))));
        assert!(tracker.catalog().is_empty());
    }

    #[test]
    fn test_azimuth_range() {
        for hour in 0..24 {
            let date = CalendarDate::new(2012, 6, 21, hour, 0, 0.0);
            let h = sun_location(&date, -33.9, -18.4);
            assert!((0.0..360.0).contains(&h.azimuth), "azimuth {}", h.azimuth);
            // below-horizon altitudes are folded by `atn2`, only the magnitude is bounded
            assert!(h.altitude.abs() <= 180.0, "altitude {}", h.altitude);
        }
    }
}
