//! # Constants and type definitions for Suntrack
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and
//! **unit aliases** shared by the time, ephemeris and coordinate modules.
//!
//! ## Overview
//!
//! - Time-scale anchors (MJD ↔ JD offset, J2000 epoch, days per Julian century)
//! - Reference epochs for precession, expressed in Julian centuries since J2000
//! - The Julian/Gregorian calendar cutover used by the MJD conversion
//! - Unit aliases documenting what every `f64` in the public API means
//!
//! All angles in this crate are carried in **degrees** (or **hours** for right ascension
//! and sidereal time). Conversion to radians only happens at the trigonometric call site.

// -------------------------------------------------------------------------------------------------
// Time constants
// -------------------------------------------------------------------------------------------------

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// Julian Date of J2000.0
pub const JD2000: f64 = 2451545.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Composite date number `10000·year + 100·month + day` of the last Julian calendar day
/// (1582-10-04). Dates at or before this value use the Julian leap-day rule.
pub const GREGORIAN_CUTOVER: f64 = 15821004.1;

/// Besselian epoch B1950.0, in Julian centuries since J2000
pub const B1950_EPOCH: JulianCenturies = -0.500002108;

/// Julian epoch J2000.0, in Julian centuries since J2000
pub const J2000_EPOCH: JulianCenturies = 0.0;

// -------------------------------------------------------------------------------------------------
// Angular conversions
// -------------------------------------------------------------------------------------------------

/// Arcseconds per degree
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Degrees of arc per hour of right ascension or sidereal time
pub const DEGREES_PER_HOUR: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle or time in hours (right ascension, sidereal time)
pub type Hour = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Julian Date (days)
pub type JD = f64;
/// Time elapsed since J2000.0, in Julian centuries of 36525 days
pub type JulianCenturies = f64;
