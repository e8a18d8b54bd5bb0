//! # Reference systems, obliquity and precession
//!
//! Low-precision (Montenbruck & Pfleger) model of the mean ecliptic and mean equator:
//!
//! - [`obliquity`]: mean obliquity of the ecliptic ε(T), in degrees.
//! - [`ecliptic_precession_matrix`] / [`equatorial_precession_matrix`]: rotation of a
//!   Cartesian vector from the mean frame of one epoch to the mean frame of another.
//! - [`frame_rotation`]: composite rotation between any two [`RefSystem`]s, routed
//!   through the mean equator.
//!
//! Epochs are always given in Julian centuries since J2000 (see
//! [`B1950_EPOCH`](crate::constants::B1950_EPOCH) / [`J2000_EPOCH`](crate::constants::J2000_EPOCH)).
//! All angles are built in degrees and go through the degree-based
//! [`cos_deg`] / [`sin_deg`] helpers.
use nalgebra::Matrix3;

use crate::constants::{Degree, JulianCenturies, ARCSEC_PER_DEGREE};
use crate::conversion::{cos_deg, sin_deg};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefSystem {
    // Ecliptic mean: ecliptic and mean equinox of the epoch
    Eclm(JulianCenturies),
    // Equatorial mean: mean equator and equinox of the epoch (no nutation)
    Equm(JulianCenturies),
}

impl RefSystem {
    pub fn epoch(&self) -> JulianCenturies {
        match *self {
            RefSystem::Eclm(t) => t,
            RefSystem::Equm(t) => t,
        }
    }
}

/// Mean obliquity of the ecliptic at epoch `t`.
///
/// ```text
/// ε(T) = 23.43929111° − (46.815 + (0.00059 − 0.001813·T)·T)·T / 3600
/// ```
pub fn obliquity(t: JulianCenturies) -> Degree {
    23.43929111 - (46.815 + (0.00059 - 0.001813 * t) * t) * t / ARCSEC_PER_DEGREE
}

/// Rotation taking mean-ecliptic Cartesian coordinates of epoch `t` to mean-equatorial
/// coordinates of the same epoch (rotation by +ε about the x axis).
///
/// Its transpose performs the inverse, equatorial → ecliptic, transformation.
pub fn obliquity_matrix(t: JulianCenturies) -> Matrix3<f64> {
    let eps = obliquity(t);
    let c = cos_deg(eps);
    let s = sin_deg(eps);

    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
}

/// Precession matrix for mean-ecliptic Cartesian coordinates, from epoch `t1` to `t2`.
///
/// The three angles (Π, π, p) are polynomials in `t1` and `Δt = t2 − t1`, with the
/// arcsecond coefficients divided by 3600 to stay in degrees:
///
/// ```text
/// Π = 174.876383889° + ((3289.4789 + 0.60622·T1)·T1 + (−869.8089 − 0.50491·T1 + 0.03536·Δt)·Δt) / 3600
/// π = ((47.0029 − (0.06603 − 0.000598·T1)·T1) + (−0.03302 + 0.000598·T1 + 0.000060·Δt)·Δt)·Δt / 3600
/// p = ((5029.0966 + (2.22226 − 0.000042·T1)·T1) + (1.11113 − 0.000042·T1 − 0.000006·Δt)·Δt)·Δt / 3600
/// ```
///
/// Arguments
/// ---------
/// * `t1`: epoch of the input frame, Julian centuries since J2000
/// * `t2`: epoch of the output frame, Julian centuries since J2000
///
/// Returns
/// -------
/// * `P` such that `x(t2) = P · x(t1)`
pub fn ecliptic_precession_matrix(t1: JulianCenturies, t2: JulianCenturies) -> Matrix3<f64> {
    let sec = ARCSEC_PER_DEGREE;
    let dt = t2 - t1;

    let ppi = 174.876383889
        + (((3289.4789 + 0.60622 * t1) * t1) + ((-869.8089 - 0.50491 * t1) + 0.03536 * dt) * dt)
            / sec;
    let pi = ((47.0029 - (0.06603 - 0.000598 * t1) * t1)
        + ((-0.03302 + 0.000598 * t1) + 0.000060 * dt) * dt)
        * dt
        / sec;
    let pa = ((5029.0966 + (2.22226 - 0.000042 * t1) * t1)
        + ((1.11113 - 0.000042 * t1) - 0.000006 * dt) * dt)
        * dt
        / sec;

    let c1 = cos_deg(ppi + pa);
    let c2 = cos_deg(pi);
    let c3 = cos_deg(ppi);
    let s1 = sin_deg(ppi + pa);
    let s2 = sin_deg(pi);
    let s3 = sin_deg(ppi);

    Matrix3::new(
        c1 * c3 + s1 * c2 * s3,
        c1 * s3 - s1 * c2 * c3,
        -s1 * s2,
        s1 * c3 - c1 * c2 * s3,
        s1 * s3 + c1 * c2 * c3,
        c1 * s2,
        s2 * s3,
        -s2 * c3,
        c2,
    )
}

/// Precession matrix for mean-equatorial Cartesian coordinates, from epoch `t1` to `t2`.
///
/// Built from the equatorial precession angles ζ, z and θ:
///
/// ```text
/// ζ = ((2306.2181 + (1.39656 − 0.000139·T1)·T1) + (0.30188 − 0.000345·T1 + 0.017998·Δt)·Δt)·Δt / 3600
/// z = ζ + (0.79280 + 0.000411·T1 + 0.000205·Δt)·Δt² / 3600
/// θ = ((2004.3109 − (0.85330 + 0.000217·T1)·T1) − (0.42665 + 0.000217·T1 + 0.041833·Δt)·Δt)·Δt / 3600
/// ```
///
/// For `t1 == t2` all three angles vanish and the matrix is the identity.
pub fn equatorial_precession_matrix(t1: JulianCenturies, t2: JulianCenturies) -> Matrix3<f64> {
    let sec = ARCSEC_PER_DEGREE;
    let dt = t2 - t1;

    let zeta = ((2306.2181 + (1.39656 - 0.000139 * t1) * t1)
        + ((0.30188 - 0.000345 * t1) + 0.017998 * dt) * dt)
        * dt
        / sec;
    let z = zeta + ((0.79280 + 0.000411 * t1) + 0.000205 * dt) * dt * dt / sec;
    let theta = ((2004.3109 - (0.85330 + 0.000217 * t1) * t1)
        - ((0.42665 + 0.000217 * t1) + 0.041833 * dt) * dt)
        * dt
        / sec;

    let c1 = cos_deg(z);
    let c2 = cos_deg(theta);
    let c3 = cos_deg(zeta);
    let s1 = sin_deg(z);
    let s2 = sin_deg(theta);
    let s3 = sin_deg(zeta);

    Matrix3::new(
        -s1 * s3 + c1 * c2 * c3,
        -s1 * c3 - c1 * c2 * s3,
        -c1 * s2,
        c1 * s3 + s1 * c2 * c3,
        c1 * c3 - s1 * c2 * s3,
        -s1 * s2,
        s2 * c3,
        -s2 * s3,
        c2,
    )
}

/// Compute the rotation matrix between two reference systems and epochs.
///
/// The rotation is assembled by chaining elementary steps, always passing through the
/// mean equator:
///
/// ```text
/// Eclm(t1) --obliquity(t1)--> Equm(t1) --precession(t1→t2)--> Equm(t2) --obliquityᵀ(t2)--> Eclm(t2)
/// ```
///
/// Steps that are not needed (same frame family, same epoch) are skipped, so
/// `frame_rotation(a, a)` is the identity.
///
/// Arguments
/// ---------
/// * `from`: source reference system
/// * `to`: target reference system
///
/// Returns
/// -------
/// * `R` such that `x_to = R · x_from`
///
/// # See also
/// * [`Cartesian::rotate`](crate::coordinates::Cartesian::rotate) – applies the result in place
pub fn frame_rotation(from: &RefSystem, to: &RefSystem) -> Matrix3<f64> {
    let mut rot = Matrix3::identity();

    if let RefSystem::Eclm(t) = *from {
        rot = obliquity_matrix(t) * rot;
    }

    let (t1, t2) = (from.epoch(), to.epoch());
    if t1 != t2 {
        rot = equatorial_precession_matrix(t1, t2) * rot;
    }

    if let RefSystem::Eclm(t) = *to {
        rot = obliquity_matrix(t).transpose() * rot;
    }

    rot
}
