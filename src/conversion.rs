//! # Angle helpers
//!
//! Degree-based trigonometry, the quadrant-resolving arctangent used by every
//! Cartesian → polar conversion, degrees/minutes/seconds decomposition, and parsing of
//! sexagesimal catalog fields.
//!
//! Angles stay in degrees everywhere in the crate; the conversion to radians happens
//! only inside [`cos_deg`] / [`sin_deg`] / [`atn2`], with the factor `π·x/180` applied in
//! that order.
use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour, DEGREES_PER_HOUR};
use crate::suntrack_errors::SuntrackError;

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(x: Degree) -> f64 {
    (PI * x / 180.0).cos()
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(x: Degree) -> f64 {
    (PI * x / 180.0).sin()
}

/// Two-argument arctangent in degrees.
///
/// The branch is chosen on the magnitudes of `y` and `x` so that the quotient passed to
/// `atan` never exceeds one, then the result is folded by the signs of `x` and `y`:
///
/// ```text
/// |y| >= |x|  ->  φ = 90 − atan(x / y)
/// otherwise   ->  φ = atan(y / x)
/// x < 0       ->  φ = 180 − φ
/// y < 0       ->  φ = −φ
/// ```
///
/// The quotients keep their signs, so for `x` and `y` of opposite signs the result is
/// **not** the angle a library `atan2` returns (e.g. `atn2(1, -2)` is `206.565…°`, not
/// `153.435…°`). Horizon azimuths are calibrated against exactly this folding, hence it
/// is reproduced as-is. The same folding applies to the latitude-like angle of
/// [`Cartesian::to_polar`](crate::coordinates::Cartesian::to_polar), so a point below the
/// reference plane does not come back with `theta` in `[-90, 0)`.
///
/// Arguments
/// ---------
/// * `y`: ordinate.
/// * `x`: abscissa.
///
/// Return
/// ------
/// * The angle in degrees, `0.0` when both inputs are zero.
pub fn atn2(y: f64, x: f64) -> Degree {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let mut phi = if y.abs() >= x.abs() {
        90.0 - (x / y).atan() * 180.0 / PI
    } else {
        (y / x).atan() * 180.0 / PI
    };

    if x < 0.0 {
        phi = 180.0 - phi;
    }
    if y < 0.0 {
        phi = -phi;
    }
    phi
}

/// Degrees, arcminutes and arcseconds of a decimal angle.
///
/// Only `degrees` carries the sign of the original value; `minutes` and `seconds` are
/// always non-negative. An angle in `(-1°, 0°)` therefore loses its sign entirely
/// (`-0.5°` decomposes to `0° 30' 0"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {:.3}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Split a decimal angle into degrees / minutes / seconds (see [`Dms`] for the sign rule).
pub fn dms(ddd: Degree) -> Dms {
    let magnitude = ddd.abs();
    let degrees = magnitude.trunc();
    let d1 = (magnitude - degrees) * 60.0;
    let minutes = d1.trunc();
    let seconds = (d1 - minutes) * 60.0;

    let degrees = degrees as i64;
    Dms {
        degrees: if ddd < 0.0 { -degrees } else { degrees },
        minutes: minutes as i64,
        seconds,
    }
}

/// Parse a right ascension string to hours
///
/// Arguments
/// ---------
/// * `ra`: a string representing the right ascension in the format `HH MM SS.SS`
///
/// Returns
/// -------
/// * `Option<Hour>`: the right ascension in decimal hours, `None` if the input format is invalid.
pub fn parse_ra_to_hours(ra: &str) -> Option<Hour> {
    let (sign, h, m, s) = split_sexagesimal(ra)?;
    if sign < 0.0 {
        return None;
    }
    Some(h + m / 60.0 + s / 3600.0)
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: a string representing the declination in the format `±DD MM SS.SS`
///
/// Returns
/// -------
/// * `Option<Degree>`: the declination in decimal degrees, `None` if the input format is invalid.
pub fn parse_dec_to_deg(dec: &str) -> Option<Degree> {
    let (sign, d, m, s) = split_sexagesimal(dec)?;
    Some(sign * (d + m / 60.0 + s / 3600.0))
}

fn split_sexagesimal(field: &str) -> Option<(f64, f64, f64, f64)> {
    let parts: Vec<&str> = field.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let sign = if parts[0].starts_with('-') { -1.0 } else { 1.0 };
    let lead: f64 = parts[0].trim_start_matches(&['-', '+'][..]).parse().ok()?;
    let m: f64 = parts[1].parse().ok()?;
    let s: f64 = parts[2].parse().ok()?;
    Some((sign, lead, m, s))
}

/// Unit of a catalog angle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AngleUnit {
    Degrees,
    Hours,
}

/// Read a catalog angle written either as a decimal number or as a sexagesimal triple.
///
/// Sexagesimal right ascensions (`AngleUnit::Hours`) are `HH MM SS.SS`, declinations
/// (`AngleUnit::Degrees`) `±DD MM SS.SS`. Decimal values are taken as-is in the given unit.
pub(crate) fn parse_angle(field: &str, unit: AngleUnit) -> Result<f64, SuntrackError> {
    let field = field.trim();
    if let Ok(value) = field.parse::<f64>() {
        return Ok(value);
    }

    let parsed = match unit {
        AngleUnit::Degrees => parse_dec_to_deg(field),
        AngleUnit::Hours => parse_ra_to_hours(field),
    };
    parsed.ok_or_else(|| SuntrackError::InvalidAngle(field.to_string()))
}

/// Convert hours of right ascension (or sidereal time) to degrees.
#[inline]
pub fn hours_to_degrees(hours: Hour) -> Degree {
    hours * DEGREES_PER_HOUR
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_trigonometry() {
        assert_eq!(cos_deg(0.0), 1.0);
        assert_eq!(sin_deg(0.0), 0.0);
        assert_relative_eq!(sin_deg(30.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(cos_deg(60.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(sin_deg(-90.0), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_atn2_degenerate_and_axes() {
        assert_eq!(atn2(0.0, 0.0), 0.0);
        assert_eq!(atn2(0.0, 1.0), 0.0);
        assert_eq!(atn2(1.0, 0.0), 90.0);
        assert_eq!(atn2(0.0, -1.0), 180.0);
        assert_eq!(atn2(-1.0, 0.0), -90.0);
    }

    #[test]
    fn test_atn2_same_sign_quadrants() {
        assert_relative_eq!(atn2(1.0, 1.0), 45.0, epsilon = 1e-12);
        assert_relative_eq!(atn2(1.0, 2.0), 26.56505117707799, epsilon = 1e-12);
        assert_relative_eq!(atn2(3.0, 4.0), 36.86989764584402, epsilon = 1e-12);
        assert_relative_eq!(atn2(-1.0, -1.0), -135.0, epsilon = 1e-12);
        assert_relative_eq!(atn2(-1.0, -2.0), -153.43494882292202, epsilon = 1e-12);
    }

    #[test]
    fn test_atn2_mixed_sign_quadrants() {
        // signed quotients fold these away from the library atan2 result
        assert_relative_eq!(atn2(1.0, -2.0), 206.56505117707798, epsilon = 1e-12);
        assert_relative_eq!(atn2(2.0, -1.0), 63.43494882292201, epsilon = 1e-12);
        assert_relative_eq!(atn2(-1.0, 2.0), 26.56505117707799, epsilon = 1e-12);
        assert_relative_eq!(atn2(-2.0, 1.0), -116.56505117707799, epsilon = 1e-12);
    }

    #[test]
    fn test_dms() {
        let d = dms(-12.5125);
        assert_eq!(d.degrees, -12);
        assert_eq!(d.minutes, 30);
        assert_relative_eq!(d.seconds, 45.0, epsilon = 1e-9);

        let d = dms(123.456789);
        assert_eq!(d.degrees, 123);
        assert_eq!(d.minutes, 27);
        assert_relative_eq!(d.seconds, 24.4404, epsilon = 1e-9);

        // sign is lost when the integer degree is zero
        assert_eq!(
            dms(-0.5),
            Dms {
                degrees: 0,
                minutes: 30,
                seconds: 0.0
            }
        );
    }

    #[test]
    fn test_dms_display() {
        assert_eq!(dms(-12.5125).to_string(), "-12° 30' 45.000\"");
    }

    #[test]
    fn test_parse_ra_to_hours() {
        assert_relative_eq!(
            parse_ra_to_hours("06 45 08.9").unwrap(),
            6.752472222222222,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            parse_ra_to_hours("18 36 57.6").unwrap(),
            18.616,
            epsilon = 1e-12
        );
        assert_eq!(parse_ra_to_hours("-01 00 00"), None);
        assert_eq!(parse_ra_to_hours("1 2 3.4.5"), None);
        assert_eq!(parse_ra_to_hours("1 2"), None);
    }

    #[test]
    fn test_parse_dec_to_deg() {
        assert_relative_eq!(
            parse_dec_to_deg("-16 43 50.16").unwrap(),
            -16.7306,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            parse_dec_to_deg("+38 47 02.4").unwrap(),
            38.784,
            epsilon = 1e-12
        );
        assert_eq!(parse_dec_to_deg("89 15 50.2.3"), None);
        assert_eq!(parse_dec_to_deg("89 15"), None);
    }

    #[test]
    fn test_parse_angle() {
        assert_eq!(parse_angle(" 38.784 ", AngleUnit::Degrees), Ok(38.784));
        assert_relative_eq!(
            parse_angle("18 36 57.6", AngleUnit::Hours).unwrap(),
            18.616,
            epsilon = 1e-12
        );
        assert_eq!(
            parse_angle("north", AngleUnit::Degrees),
            Err(SuntrackError::InvalidAngle("north".into()))
        );
    }

    #[test]
    fn test_hours_to_degrees() {
        assert_eq!(hours_to_degrees(6.0), 90.0);
        assert_eq!(hours_to_degrees(-1.5), -22.5);
    }
}
