//! # Calendar and time scales
//!
//! Conversions from a civil calendar instant to the continuous time scales used by the
//! ephemeris and frame code:
//!
//! ```text
//! CalendarDate --to_mjd--> MJD --mjd_to_jd--> JD --julian_centuries_since_j2000--> T
//!                           \
//!                            `--lmst(λ)--> local mean sidereal time [h]
//! ```
//!
//! The MJD conversion handles the historical Julian → Gregorian switch: dates up to
//! 1582-10-04 use the Julian leap-day rule, later dates the Gregorian one.
use std::fmt;
use std::str::FromStr;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, Hour, JulianCenturies, DAYS_PER_CENTURY, DEGREES_PER_HOUR, GREGORIAN_CUTOVER, JD,
    JD2000, JDTOMJD, MJD, T2000,
};
use crate::suntrack_errors::SuntrackError;

/// A civil (UT) calendar instant.
///
/// Fields are taken at face value: no range check is performed, and the proleptic
/// calendar in force is decided by [`to_mjd`] from the date itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Seconds, fractional part included
    pub second: f64,
}

impl CalendarDate {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        CalendarDate {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl From<Epoch> for CalendarDate {
    /// Gregorian UTC breakdown of the epoch, nanoseconds folded into `second`.
    fn from(epoch: Epoch) -> Self {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        CalendarDate::new(
            year,
            month,
            day,
            hour,
            minute,
            second as f64 + nanos as f64 * 1e-9,
        )
    }
}

impl FromStr for CalendarDate {
    type Err = SuntrackError;

    /// Parse an ISO-8601 timestamp (e.g. `2012-09-07T19:00:00`), interpreted as UTC
    /// unless a time scale suffix says otherwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epoch =
            Epoch::from_str(s.trim()).map_err(|e| SuntrackError::InvalidDate(format!("{s}: {e}")))?;
        Ok(epoch.into())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Transformation from a calendar date to modified julian date (MJD)
///
/// January and February are counted as months 13 and 14 of the previous year. The
/// leap-day count follows the Gregorian rule after the calendar reform and the Julian
/// rule up to 1582-10-04, so both sides of the reform map onto one continuous day count.
///
/// Argument
/// --------
/// * `date`: the civil instant to convert
///
/// Return
/// ------
/// * the MJD, integer day count plus the fraction of the day given by hour/minute/second
pub fn to_mjd(date: &CalendarDate) -> MJD {
    let year = date.year as i64;
    let month = date.month as i64;
    let day = date.day as i64;

    let composite = (10_000 * year + 100 * month + day) as f64;
    let (y, m) = if date.month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let leap_days = if composite <= GREGORIAN_CUTOVER {
        -2 + (y + 4716).div_euclid(4) - 1179
    } else {
        y.div_euclid(400) - y.div_euclid(100) + y.div_euclid(4)
    };

    let days = 365 * y - 679_004 + leap_days + (30.6001 * (m + 1) as f64) as i64 + day;

    days as f64
        + date.hour as f64 / 24.0
        + date.minute as f64 / 1440.0
        + date.second / 86400.0
}

/// Transformation from modified julian date (MJD) in julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> JD {
    mjd + JDTOMJD
}

/// Transformation from julian date (JD) in modified julian date (MJD)
pub fn jd_to_mjd(jd: JD) -> MJD {
    jd - JDTOMJD
}

/// Number of Julian centuries elapsed between J2000.0 and `jd`.
pub fn julian_centuries_since_j2000(jd: JD) -> JulianCenturies {
    (jd - JD2000) / DAYS_PER_CENTURY
}

/// Fractional part of `x`, folded into `[0, 1)`.
///
/// The integer part is removed by truncation toward zero, then one is added to a
/// negative remainder: `frac(-0.25) == 0.75`, `frac(1.75) == 0.75`.
pub fn frac(x: f64) -> f64 {
    let x = x - x.trunc();
    if x < 0.0 {
        x + 1.0
    } else {
        x
    }
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in hours for a given Modified Julian Date.
///
/// The polynomial part is evaluated at 0h UT of the day (`T` counted from J2000.0 in
/// Julian centuries), then the elapsed UT hours are added at the sidereal rate.
///
/// # Arguments
/// * `mjd` - Modified Julian Date (UT)
///
/// # Returns
/// * GMST in hours, **not** reduced to `[0, 24)`.
pub fn gmst(mjd: MJD) -> Hour {
    const G0: f64 = 6.697374558;
    const RAP: f64 = 1.0027379093;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 0.093104;
    const C3: f64 = 6.2e-6;

    let mjd0 = mjd.trunc();
    let ut = (mjd - mjd0) * 24.0;
    let t = (mjd0 - T2000) / DAYS_PER_CENTURY;

    G0 + RAP * ut + (C1 + (C2 - C3 * t) * t) * t / 3600.0
}

/// Local Mean Sidereal Time, in hours within `[0, 24)`.
///
/// `longitude` is **subtracted** from the Greenwich sidereal time, i.e. longitudes are
/// counted positive towards the west (Somerset, NJ is `+74.5`).
pub fn lmst(mjd: MJD, longitude: Degree) -> Hour {
    24.0 * frac((gmst(mjd) - longitude / DEGREES_PER_HOUR) / 24.0)
}
