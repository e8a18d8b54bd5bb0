//! # Low-precision solar ephemeris
//!
//! Geocentric equatorial coordinates of the Sun from a two-term equation of the centre
//! (Montenbruck & Pfleger). Accuracy is of the order of 0.01°, which is far below what
//! matters for altitude/azimuth tracking.
use crate::constants::JulianCenturies;
use crate::coordinates::horizon::EquatorialPosition;
use crate::time::frac;

/// 2π as used by the ephemeris series (truncated to ten significant digits)
#[allow(clippy::approx_constant)]
const P2: f64 = 6.283185307;

/// Fixed obliquity of the ecliptic used by the solar series
const COS_EPS: f64 = 0.91748;
const SIN_EPS: f64 = 0.39778;

/// Compute the declination and right ascension of the Sun.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000
///
/// Return
/// ------
/// * [`EquatorialPosition`] with the declination in degrees, within `(-90, 90)`, and the
///   right ascension in hours, within `[0, 24)`
///
/// Details
/// -------
/// 1. Mean anomaly `M = 2π·frac(0.993133 + 99.997361·T)`.
/// 2. Equation of the centre `ΔL = 6893″·sin M + 72″·sin 2M`.
/// 3. Ecliptic longitude `L = 2π·frac(0.7859453 + M/2π + (6191.2·T + ΔL)/1296000)`.
/// 4. Rotation to the equator with the fixed obliquity (cos ε = 0.91748, sin ε = 0.39778),
///    the right ascension being taken with the half-angle formula
///    `α = 2·atan(y / (x + ρ))` so that no quadrant correction is needed.
pub fn sun_position(t: JulianCenturies) -> EquatorialPosition {
    let m = P2 * frac(0.993133 + 99.997361 * t);
    let dl = 6893.0 * m.sin() + 72.0 * (2.0 * m).sin();
    let l = P2 * frac(0.7859453 + m / P2 + (6191.2 * t + dl) / 1296000.0);

    let sl = l.sin();
    let x = l.cos();
    let y = COS_EPS * sl;
    let z = SIN_EPS * sl;
    let rho = (1.0 - z * z).sqrt();

    let declination = (360.0 / P2) * (z / rho).atan();
    let mut right_ascension = (48.0 / P2) * (y / (x + rho)).atan();
    if right_ascension < 0.0 {
        right_ascension += 24.0;
    }

    EquatorialPosition {
        declination,
        right_ascension,
    }
}
