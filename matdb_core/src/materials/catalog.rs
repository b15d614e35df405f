//! Material catalog
//!
//! An ordered, immutable collection of [`MaterialRecord`]s with name lookup
//! and property search. A catalog only exists once its whole source has
//! passed schema validation.
//!
//! ## Example
//!
//! ```rust
//! use matdb_core::materials::{MaterialCatalog, Property, PropertyRange};
//!
//! let catalog = MaterialCatalog::bundled()?;
//! let s235 = catalog.find_by_name("Structural Steel (S235)").unwrap();
//! assert_eq!(s235.yield_strength_mpa, 235.0);
//!
//! let light = catalog.search_by_property(Property::Density, PropertyRange::at_most(3000.0));
//! assert!(light.iter().all(|m| m.density_kg_m3 <= 3000.0));
//! # Ok::<(), matdb_core::errors::CatalogError>(())
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use super::property::Property;
use super::record::MaterialRecord;
use super::schema::{validate_document, validate_text};
use crate::errors::{CatalogError, CatalogResult};

/// Bundled reference table, embedded at compile time
pub const BUNDLED_JSON: &str = include_str!("../../assets/materials.json");

static BUNDLED: Lazy<CatalogResult<MaterialCatalog>> =
    Lazy::new(|| MaterialCatalog::from_json_str(BUNDLED_JSON));

/// Inclusive bounds for a property search.
///
/// Missing bounds default to `0.0` and `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRange {
    pub min: f64,
    pub max: f64,
}

impl PropertyRange {
    pub fn between(min: f64, max: f64) -> Self {
        PropertyRange { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        PropertyRange { min, max: f64::INFINITY }
    }

    pub fn at_most(max: f64) -> Self {
        PropertyRange { min: 0.0, max }
    }

    /// Build from optional bounds, e.g. from command line flags
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Self {
        PropertyRange {
            min: min.unwrap_or(0.0),
            max: max.unwrap_or(f64::INFINITY),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for PropertyRange {
    fn default() -> Self {
        PropertyRange::from_bounds(None, None)
    }
}

/// Validated, read-only material catalog.
///
/// Records keep their stored order. Names are indexed for exact lookup.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    records: Vec<MaterialRecord>,

    /// Material name -> position in `records`
    by_name: HashMap<String, usize>,
}

impl MaterialCatalog {
    /// Parse and validate a catalog from its stored JSON text.
    ///
    /// The whole catalog is rejected on the first invalid record, including
    /// a record that writes the same key twice.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let records = validate_text(json)?;
        Ok(Self::from_validated(records))
    }

    /// Validate an already parsed JSON document.
    ///
    /// `serde_json::Value` keeps only the last of any repeated key, so this
    /// cannot report `DuplicateField`. Prefer [`from_json_str`](Self::from_json_str)
    /// for text from disk.
    pub fn from_json_value(doc: &serde_json::Value) -> CatalogResult<Self> {
        let records = validate_document(doc)?;
        Ok(Self::from_validated(records))
    }

    // Callers guarantee names are unique.
    fn from_validated(records: Vec<MaterialRecord>) -> Self {
        let by_name = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.material.clone(), i))
            .collect();
        MaterialCatalog { records, by_name }
    }

    /// The bundled reference catalog.
    ///
    /// Parsed once per process on first use and shared afterwards.
    pub fn bundled() -> CatalogResult<&'static MaterialCatalog> {
        (*BUNDLED).as_ref().map_err(Clone::clone)
    }

    /// Exact, case-sensitive lookup by material name
    pub fn find_by_name(&self, name: &str) -> Option<&MaterialRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Iterate over all records in stored order.
    ///
    /// Each call starts again from the first record.
    pub fn all(&self) -> std::slice::Iter<'_, MaterialRecord> {
        self.records.iter()
    }

    /// All records as a slice
    pub fn records(&self) -> &[MaterialRecord] {
        &self.records
    }

    /// Record at a stored position
    pub fn get(&self, index: usize) -> Option<&MaterialRecord> {
        self.records.get(index)
    }

    /// All material names in stored order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.material.as_str()).collect()
    }

    /// Records whose `property` lies within `range` (inclusive), in stored order
    pub fn search_by_property(
        &self,
        property: Property,
        range: PropertyRange,
    ) -> Vec<&MaterialRecord> {
        self.records
            .iter()
            .filter(|r| range.contains(r.value(property)))
            .collect()
    }

    /// Records whose name contains `fragment`, ignoring case
    pub fn search(&self, fragment: &str) -> Vec<&MaterialRecord> {
        let needle = fragment.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.material.to_lowercase().contains(&needle))
            .collect()
    }

    /// Get the number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize back to the stored format (pretty-printed JSON array)
    pub fn to_json_string(&self) -> CatalogResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::serialization(e.to_string()))
    }
}

impl Serialize for MaterialCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl PartialEq for MaterialCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<'a> IntoIterator for &'a MaterialCatalog {
    type Item = &'a MaterialRecord;
    type IntoIter = std::slice::Iter<'a, MaterialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
