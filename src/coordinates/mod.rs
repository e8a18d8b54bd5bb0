//! # Polar & Cartesian coordinates
//!
//! Three-component positions in the two representations used by the spherical-astronomy
//! pipeline, kept as **distinct types** so that a transform can only be applied to the
//! representation it is written for:
//!
//! - [`Polar`]: `(radius, theta, phi)` where `theta` is measured **from the fundamental
//!   plane** (latitude, declination, altitude) and `phi` along it (longitude, right
//!   ascension, azimuth), both in degrees.
//! - [`Cartesian`]: `(x, y, z)` in a right-handed frame whose x axis points to `phi = 0`
//!   and whose z axis points to `theta = 90°`.
//!
//! ```text
//!            to_cartesian                precess_* / *_to_* / rotate
//!   Polar  ---------------->  Cartesian  --------------------------->  Cartesian
//!     ^                           |
//!     `---------- to_polar -------'
//! ```
//!
//! Which frame (ecliptic, equatorial, horizon) and epoch a value refers to is left to the
//! caller; [`frame_rotation`](crate::ref_system::frame_rotation) builds the matrix
//! between two explicit [`RefSystem`](crate::ref_system::RefSystem)s.
//!
//! The horizon step, whose input is a (declination, hour angle, latitude) triple rather
//! than a position, lives in [`horizon`].
pub mod horizon;

use std::fmt;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, JulianCenturies};
use crate::conversion::{atn2, cos_deg, sin_deg};
use crate::ref_system::{ecliptic_precession_matrix, equatorial_precession_matrix, obliquity};

/// Spherical position: radius, elevation-like angle `theta` and azimuth-like angle `phi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub radius: f64,
    /// Angle from the fundamental plane, degrees
    pub theta: Degree,
    /// Angle along the fundamental plane, degrees
    pub phi: Degree,
}

impl Polar {
    pub fn new(radius: f64, theta: Degree, phi: Degree) -> Self {
        Polar { radius, theta, phi }
    }

    /// Convert to Cartesian.
    ///
    /// ```text
    /// x = r·cosθ·cosφ
    /// y = r·cosθ·sinφ
    /// z = r·sinθ
    /// ```
    pub fn to_cartesian(&self) -> Cartesian {
        let rcst = self.radius * cos_deg(self.theta);
        Cartesian::new(
            rcst * cos_deg(self.phi),
            rcst * sin_deg(self.phi),
            self.radius * sin_deg(self.theta),
        )
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.radius, self.theta, self.phi)
    }
}

/// Rectangular position in a right-handed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian(Vector3<f64>);

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian(Vector3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.0
    }

    /// Convert to polar.
    ///
    /// The radius is `√(x² + y² + z²)`, `phi` is `atn2(y, x)` shifted into `[0, 360)`,
    /// and `theta` is `atn2(z, ρ)` with `ρ = √(x² + y²)`. Both angles go through
    /// [`atn2`], so the origin maps to `(0, 0, 0)` instead of failing.
    pub fn to_polar(&self) -> Polar {
        let (x, y, z) = (self.0.x, self.0.y, self.0.z);
        let rho = x * x + y * y;

        let mut phi = atn2(y, x);
        if phi < 0.0 {
            phi += 360.0;
        }

        Polar {
            radius: (rho + z * z).sqrt(),
            theta: atn2(z, rho.sqrt()),
            phi,
        }
    }

    /// Apply a 3×3 rotation (`x ← R·x`).
    pub fn rotate(&mut self, rot: &Matrix3<f64>) {
        self.0 = rot * self.0;
    }

    /// Precess a mean-ecliptic position from epoch `t1` to epoch `t2`
    /// (Julian centuries since J2000).
    pub fn precess_ecliptic(&mut self, t1: JulianCenturies, t2: JulianCenturies) {
        self.rotate(&ecliptic_precession_matrix(t1, t2));
    }

    /// Precess a mean-equatorial position from epoch `t1` to epoch `t2`
    /// (Julian centuries since J2000).
    pub fn precess_equatorial(&mut self, t1: JulianCenturies, t2: JulianCenturies) {
        self.rotate(&equatorial_precession_matrix(t1, t2));
    }

    /// Rotate mean-ecliptic coordinates of epoch `t` into mean-equatorial coordinates
    /// of the same epoch. `x` is unchanged.
    pub fn ecliptic_to_equatorial(&mut self, t: JulianCenturies) {
        let eps = obliquity(t);
        let c = cos_deg(eps);
        let s = sin_deg(eps);
        let (y, z) = (self.0.y, self.0.z);

        self.0.y = y * c - s * z;
        self.0.z = y * s + c * z;
    }

    /// Inverse of [`Cartesian::ecliptic_to_equatorial`] for the same epoch.
    pub fn equatorial_to_ecliptic(&mut self, t: JulianCenturies) {
        let eps = obliquity(t);
        let c = cos_deg(eps);
        let s = sin_deg(eps);
        let (y, z) = (self.0.y, self.0.z);

        self.0.y = y * c + s * z;
        self.0.z = -y * s + c * z;
    }
}

impl From<Vector3<f64>> for Cartesian {
    fn from(v: Vector3<f64>) -> Self {
        Cartesian(v)
    }
}

impl From<Cartesian> for Vector3<f64> {
    fn from(c: Cartesian) -> Self {
        c.0
    }
}

impl fmt::Display for Cartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0.x, self.0.y, self.0.z)
    }
}
