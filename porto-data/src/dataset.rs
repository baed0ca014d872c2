//! Load venue datasets from JSON files.
//!
//! A dataset is a JSON array of venue records using the field names `Place`,
//! `Venue`, `Latitude`, `Longitude` and the optional `Address`, `Price`,
//! `Tags` and `Specialty`. Datasets are read once per view and treated as
//! immutable afterwards.

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use porto_core::{Venue, VenueCollection};
use thiserror::Error;

use crate::fs;

/// Errors raised while loading a venue dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("failed to read venue dataset {path}")]
    Open {
        /// Dataset location.
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a JSON array of venue records.
    #[error("failed to parse venue dataset {path}")]
    Parse {
        /// Dataset location.
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a JSON array of venue records.
///
/// # Errors
///
/// Returns the `serde_json` error when the text is not an array of records
/// or a record lacks a name or coordinates.
///
/// # Examples
/// ```
/// let venues = porto_data::parse_venues(
///     r#"[{"Place": "Aduela", "Venue": "bar", "Latitude": 41.1489, "Longitude": -8.6159}]"#,
/// )?;
/// assert_eq!(venues.len(), 1);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn parse_venues(json: &str) -> Result<VenueCollection, serde_json::Error> {
    let venues: Vec<Venue> = serde_json::from_str(json)?;
    Ok(VenueCollection::new(venues))
}

/// Load the dataset at `path`.
///
/// # Errors
///
/// Returns [`DatasetError::Open`] when the file cannot be read and
/// [`DatasetError::Parse`] when its contents are not a venue array.
pub fn load_venues(path: &Utf8Path) -> Result<VenueCollection, DatasetError> {
    let json = fs::read_to_string(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let venues = parse_venues(&json).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} venues from {path}", venues.len());
    Ok(venues)
}
