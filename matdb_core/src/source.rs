//! Catalog source selection
//!
//! Consumers either use the table bundled into the crate or point at a JSON
//! file with the same layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogResult;
use crate::file_io::load_catalog;
use crate::materials::MaterialCatalog;

/// Where to load a catalog from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "path")]
pub enum CatalogSource {
    /// The reference table compiled into matdb_core
    #[default]
    Bundled,
    /// A JSON file on disk
    File(PathBuf),
}

impl CatalogSource {
    /// `Some(path)` selects a file, `None` the bundled table
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(CatalogSource::File).unwrap_or_default()
    }

    /// Load the catalog this source names.
    ///
    /// The bundled table is cloned out of its shared static; use
    /// [`MaterialCatalog::bundled`] directly to borrow it instead.
    pub fn open(&self) -> CatalogResult<MaterialCatalog> {
        match self {
            CatalogSource::Bundled => MaterialCatalog::bundled().cloned(),
            CatalogSource::File(path) => load_catalog(path),
        }
    }

    /// Short human-readable label
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Bundled => "bundled catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}
