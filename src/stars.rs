//! # Star registry
//!
//! Fixed stars are described by their equatorial coordinates only. A [`StarCatalog`] maps
//! a star name to a record whose declination and right ascension are filled in by
//! explicit registration calls, or loaded in one go from a CSV file:
//!
//! ```text
//! name,declination,right_ascension
//! vega,38.784,18.616
//! arcturus,+19 10 56.7,14 15 39.7
//! ```
//!
//! Angles are either decimal (degrees for the declination, hours for the right
//! ascension) or sexagesimal triples.
//!
//! A star is usable only once **both** coordinates are known; looking up a partially
//! registered or unknown star is a [`SuntrackError::ConfigurationError`].
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{Degree, Hour};
use crate::conversion::{parse_angle, AngleUnit};
use crate::coordinates::horizon::EquatorialPosition;
use crate::suntrack_errors::SuntrackError;

/// Sirius (α CMa): declination −16.7306°, right ascension 6.75242 h.
pub const SIRIUS: EquatorialPosition = EquatorialPosition::new(-16.7306, 6.75242);

/// Registration state of one star.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StarRecord {
    pub declination: Option<Degree>,
    pub right_ascension: Option<Hour>,
}

impl StarRecord {
    fn position(&self, name: &str) -> Result<EquatorialPosition, SuntrackError> {
        let declination = self.declination.ok_or_else(|| {
            SuntrackError::ConfigurationError(format!(
                "declination of star '{name}' was never registered"
            ))
        })?;
        let right_ascension = self.right_ascension.ok_or_else(|| {
            SuntrackError::ConfigurationError(format!(
                "right ascension of star '{name}' was never registered"
            ))
        })?;
        Ok(EquatorialPosition::new(declination, right_ascension))
    }
}

#[derive(Debug, Deserialize)]
struct StarRow {
    name: String,
    declination: String,
    right_ascension: String,
}

/// Name → coordinates registry of user-defined stars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarCatalog {
    stars: HashMap<String, StarRecord>,
}

impl StarCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Names of every star with at least one registered coordinate.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stars.keys().map(String::as_str)
    }

    pub fn record(&self, name: &str) -> Option<&StarRecord> {
        self.stars.get(name)
    }

    /// Set the declination (degrees) of `name`, creating the entry if needed.
    pub fn set_declination(&mut self, name: &str, declination: Degree) {
        let record = self.stars.entry(name.to_string()).or_default();
        if let Some(previous) = record.declination.replace(declination) {
            log::debug!("star '{name}': declination {previous} replaced by {declination}");
        }
    }

    /// Set the right ascension (hours) of `name`, creating the entry if needed.
    pub fn set_right_ascension(&mut self, name: &str, right_ascension: Hour) {
        let record = self.stars.entry(name.to_string()).or_default();
        if let Some(previous) = record.right_ascension.replace(right_ascension) {
            log::debug!("star '{name}': right ascension {previous} replaced by {right_ascension}");
        }
    }

    /// Register both coordinates of `name` at once.
    pub fn register(&mut self, name: &str, declination: Degree, right_ascension: Hour) {
        self.set_declination(name, declination);
        self.set_right_ascension(name, right_ascension);
    }

    /// Equatorial position of a fully registered star.
    ///
    /// Errors
    /// ------
    /// * [`SuntrackError::ConfigurationError`] if the star is unknown, or if its
    ///   declination or right ascension has not been set. The declination is checked first.
    pub fn position(&self, name: &str) -> Result<EquatorialPosition, SuntrackError> {
        self.stars
            .get(name)
            .copied()
            .unwrap_or_default()
            .position(name)
    }

    /// Build a catalog from CSV data with the header `name,declination,right_ascension`.
    ///
    /// Later rows for the same name overwrite earlier ones.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SuntrackError> {
        let mut catalog = StarCatalog::new();
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        for row in rdr.deserialize() {
            let row: StarRow = row?;
            let declination = parse_angle(&row.declination, AngleUnit::Degrees);
            let right_ascension = parse_angle(&row.right_ascension, AngleUnit::Hours);

            let (declination, right_ascension) = match (declination, right_ascension) {
                (Ok(dec), Ok(ra)) => (dec, ra),
                (Err(e), _) | (_, Err(e)) => {
                    log::warn!("star catalog: invalid coordinates for '{}'", row.name);
                    return Err(e);
                }
            };
            catalog.register(&row.name, declination, right_ascension);
        }

        log::debug!("star catalog: {} stars loaded", catalog.len());
        Ok(catalog)
    }

    /// Read a catalog from a CSV file (see [`StarCatalog::from_csv_reader`]).
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, SuntrackError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }
}
