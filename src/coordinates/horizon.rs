//! Equatorial → horizon transformation.
//!
//! A body fixed on the celestial sphere by its [`EquatorialPosition`] is turned into a
//! local [`LocalEquatorial`] triple (declination, hour angle, observer latitude) once the
//! local sidereal time is known; [`LocalEquatorial::to_horizon`] then gives its altitude
//! and azimuth.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour};
use crate::conversion::{cos_deg, sin_deg};

use super::{Cartesian, Polar};

/// Equatorial coordinates of a body: declination in degrees, right ascension in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialPosition {
    pub declination: Degree,
    pub right_ascension: Hour,
}

impl EquatorialPosition {
    pub const fn new(declination: Degree, right_ascension: Hour) -> Self {
        EquatorialPosition {
            declination,
            right_ascension,
        }
    }
}

/// Input of the horizon transformation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalEquatorial {
    /// Declination δ of the body, degrees
    pub declination: Degree,
    /// Hour angle τ of the body, degrees (positive west of the meridian)
    pub hour_angle: Degree,
    /// Geographic latitude φ of the observer, degrees
    pub latitude: Degree,
}

impl LocalEquatorial {
    pub fn new(declination: Degree, hour_angle: Degree, latitude: Degree) -> Self {
        LocalEquatorial {
            declination,
            hour_angle,
            latitude,
        }
    }

    /// Convert to horizon coordinates.
    ///
    /// The horizon-frame Cartesian vector
    ///
    /// ```text
    /// x = cosδ·sinφ·cosτ − sinδ·cosφ
    /// y = cosδ·sinτ
    /// z = cosδ·cosφ·cosτ + sinδ·sinφ
    /// ```
    ///
    /// is immediately converted with [`Cartesian::to_polar`]: the returned `theta` is the
    /// altitude and `phi` the azimuth in `[0, 360)`.
    pub fn to_horizon(&self) -> Polar {
        let cs_phi = cos_deg(self.latitude);
        let sn_phi = sin_deg(self.latitude);
        let cs_dec = cos_deg(self.declination);
        let sn_dec = sin_deg(self.declination);
        let cs_tau = cos_deg(self.hour_angle);

        let x = cs_dec * sn_phi * cs_tau - sn_dec * cs_phi;
        let y = cs_dec * sin_deg(self.hour_angle);
        let z = cs_dec * cs_phi * cs_tau + sn_dec * sn_phi;

        Cartesian::new(x, y, z).to_polar()
    }
}

/// Apparent position of a body for an observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonPosition {
    /// Altitude above the horizon, degrees
    pub altitude: Degree,
    /// Azimuth, degrees in `[0, 360)`
    pub azimuth: Degree,
}

impl From<Polar> for HorizonPosition {
    fn from(p: Polar) -> Self {
        HorizonPosition {
            altitude: p.theta,
            azimuth: p.phi,
        }
    }
}

impl fmt::Display for HorizonPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alt={:.3} az={:.3}", self.altitude, self.azimuth)
    }
}
