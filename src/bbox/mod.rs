//! Geographic bounding box and its CSV file format.
//!
//! The file holds a header row and exactly one data row:
//!
//! ```text
//! minlatitude,maxlatitude,minlongitude,maxlongitude
//! 35.0,47.5,5.0,20.0
//! ```
//!
//! Column order is free; the header names are not.

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error_handling::ConfigError;

const HEADER_FIELDS: [&str; 4] = ["minlatitude", "maxlatitude", "minlongitude", "maxlongitude"];

/// Rectangular geographic filter, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge
    #[serde(rename = "minlatitude")]
    pub min_lat: f64,
    /// Northern edge
    #[serde(rename = "maxlatitude")]
    pub max_lat: f64,
    /// Western edge
    #[serde(rename = "minlongitude")]
    pub min_lon: f64,
    /// Eastern edge
    #[serde(rename = "maxlongitude")]
    pub max_lon: f64,
}

impl BoundingBox {
    /// Box covering Italy and its seas.
    pub const ITALY: BoundingBox = BoundingBox {
        min_lat: 35.0,
        max_lat: 47.5,
        min_lon: 5.0,
        max_lon: 20.0,
    };

    /// Builds a box, rejecting inverted or out-of-range bounds.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, ConfigError> {
        let bbox = Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        };
        bbox.check()?;
        Ok(bbox)
    }

    /// Inclusive containment test.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let values = [self.min_lat, self.max_lat, self.min_lon, self.max_lon];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::InvalidBounds(
                "bounds must be finite numbers".to_string(),
            ));
        }
        if self.min_lat > self.max_lat {
            return Err(ConfigError::InvalidBounds(format!(
                "minlatitude {} is greater than maxlatitude {}",
                self.min_lat, self.max_lat
            )));
        }
        if self.min_lon > self.max_lon {
            return Err(ConfigError::InvalidBounds(format!(
                "minlongitude {} is greater than maxlongitude {}",
                self.min_lon, self.max_lon
            )));
        }
        if self.min_lat < -90.0 || self.max_lat > 90.0 {
            return Err(ConfigError::InvalidBounds(format!(
                "latitudes must lie within [-90, 90] (got {}..{})",
                self.min_lat, self.max_lat
            )));
        }
        if self.min_lon < -180.0 || self.max_lon > 180.0 {
            return Err(ConfigError::InvalidBounds(format!(
                "longitudes must lie within [-180, 180] (got {}..{})",
                self.min_lon, self.max_lon
            )));
        }
        Ok(())
    }
}

/// Reads the bounding box from a two-row CSV file.
///
/// # Errors
///
/// Returns `ConfigError` if the file is missing, the header is not exactly the
/// four expected names, there is not exactly one data row, a value is not
/// numeric, or the bounds are invalid.
pub fn load_bounding_box(path: &Path) -> Result<BoundingBox, ConfigError> {
    let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let csv_err = |source| ConfigError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let found: BTreeSet<&str> = headers.iter().collect();
    let expected: BTreeSet<&str> = HEADER_FIELDS.into_iter().collect();
    if headers.len() != HEADER_FIELDS.len() || found != expected {
        return Err(ConfigError::Header {
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let rows = reader
        .deserialize::<BoundingBox>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_err)?;
    let [bbox] = rows.as_slice() else {
        return Err(ConfigError::RowCount { rows: rows.len() });
    };

    bbox.check()?;
    debug!("Loaded bounding box from {}: {:?}", path.display(), bbox);
    Ok(*bbox)
}

/// Writes `bbox` as a two-row CSV file, replacing any existing file.
pub fn write_bounding_box(path: &Path, bbox: &BoundingBox) -> Result<(), ConfigError> {
    bbox.check()?;
    let mut writer = csv::Writer::from_path(path).map_err(|source| ConfigError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    writer.serialize(bbox).map_err(|source| ConfigError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
