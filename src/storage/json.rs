//! JSON-backed repository for brickset
//!
//! Reads a document holding a top-level JSON array into a typed,
//! fully materialized collection. Nothing is loaded lazily: once a
//! `JsonRepository` exists, every record is in memory.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::core::errors::{Result, RepositoryError};
use crate::core::repository::Repository;

/// Directory holding the data files shipped with the crate
pub fn resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Documents compiled into the binary, for runs outside the source tree
const BUNDLED: &[(&str, &str)] = &[
    ("brickset.json", include_str!("../../resources/brickset.json")),
];

/// Text of a bundled resource, if one has this name
pub fn bundled(name: &str) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|(bundled_name, _)| *bundled_name == name)
        .map(|(_, text)| *text)
}

/// Load every record of a JSON array document, in document order
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

/// A read-only repository loaded from a JSON document
#[derive(Debug, Clone)]
pub struct JsonRepository<T> {
    /// File the records came from, if any
    source: Option<PathBuf>,
    /// The loaded records
    records: Vec<T>,
}

impl<T: DeserializeOwned> JsonRepository<T> {
    /// Open the JSON document at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let records = load_json(path)?;
        info!("Loaded {} records from {}", records.len(), path.display());

        Ok(JsonRepository {
            source: Some(path.to_path_buf()),
            records,
        })
    }

    /// Open a named resource
    ///
    /// The name is used as a path when it points to an existing file,
    /// otherwise it is looked up in the crate's resources directory and
    /// finally among the documents compiled into the binary.
    pub fn from_resource(name: &str) -> Result<Self> {
        let direct = PathBuf::from(name);
        if direct.is_file() {
            return Self::open(direct);
        }

        let shipped = resources_dir().join(name);
        debug!("Resource {} not found as a path, trying {}", name, shipped.display());
        if shipped.is_file() {
            return Self::open(shipped);
        }

        if let Some(text) = bundled(name) {
            info!("Using the compiled-in copy of {}", name);
            return Self::from_reader(text.as_bytes());
        }

        Err(RepositoryError::ResourceNotFound(name.to_string()))
    }

    /// Read a JSON document from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<T> = serde_json::from_reader(reader)?;
        info!("Loaded {} records from reader", records.len());

        Ok(JsonRepository {
            source: None,
            records,
        })
    }
}

impl<T> JsonRepository<T> {
    /// Path of the document the records were read from
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl<T: DeserializeOwned> FromStr for JsonRepository<T> {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl<T: Send + Sync> Repository<T> for JsonRepository<T> {
    fn get_all(&self) -> &[T] {
        &self.records
    }
}
