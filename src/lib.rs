//! # suntrack
//!
//! Altitude and azimuth of the Sun, of Sirius, and of user-registered fixed stars for an
//! observer on Earth, following the low-precision algorithms of Montenbruck & Pfleger,
//! *Astronomy on the Personal Computer*.
//!
//! The crate is organised bottom-up:
//!
//! - [`conversion`]: degree trigonometry, the quadrant-folding `atn2`, DMS decomposition,
//!   sexagesimal parsing.
//! - [`time`]: calendar date → MJD / JD / Julian centuries, sidereal time.
//! - [`ref_system`]: obliquity of the ecliptic and precession matrices.
//! - [`coordinates`]: [`Polar`](coordinates::Polar) / [`Cartesian`](coordinates::Cartesian)
//!   positions and the equatorial → horizon step.
//! - [`sun`]: solar ephemeris.
//! - [`stars`]: star registry and CSV star catalogs.
//! - [`suntrack`]: end-to-end location queries.
//!
//! ```rust
//! use suntrack::{sun_location, CalendarDate};
//!
//! let h = sun_location(&CalendarDate::new(2012, 9, 7, 19, 0, 0.0), 40.5, 74.5);
//! assert!((h.altitude - 45.453).abs() < 1e-3);
//! ```
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod ref_system;
pub mod stars;
pub mod sun;
pub mod suntrack;
pub mod suntrack_errors;
pub mod time;

pub use crate::coordinates::horizon::{EquatorialPosition, HorizonPosition};
pub use crate::stars::{StarCatalog, SIRIUS};
pub use crate::suntrack::{sirius_location, star_location, sun_location, Suntrack};
pub use crate::suntrack_errors::SuntrackError;
pub use crate::time::CalendarDate;
