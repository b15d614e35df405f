//! # File I/O Module
//!
//! Loading catalogs from disk and exporting them back.
//!
//! - **Full validation**: files go through the same schema checks as the
//!   bundled table
//! - **Atomic saves**: write to `.tmp`, fsync, rename over the target
//!
//! ## Example
//!
//! ```rust,no_run
//! use matdb_core::file_io::{load_catalog, save_catalog};
//! use matdb_core::MaterialCatalog;
//! use std::path::Path;
//!
//! let catalog = MaterialCatalog::bundled()?;
//! save_catalog(catalog, Path::new("materials.json"))?;
//!
//! let reloaded = load_catalog(Path::new("materials.json"))?;
//! assert_eq!(reloaded.len(), catalog.len());
//! # Ok::<(), matdb_core::errors::CatalogError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::{CatalogError, CatalogResult};
use crate::materials::MaterialCatalog;

/// Load and validate a catalog from a UTF-8 JSON file.
///
/// # Returns
///
/// * `Ok(MaterialCatalog)` - Every record passed validation
/// * `Err(CatalogError::Schema)` - A record broke the schema
/// * `Err(CatalogError::SerializationError)` - Invalid JSON or UTF-8
/// * `Err(CatalogError::FileError)` - I/O error
pub fn load_catalog(path: &Path) -> CatalogResult<MaterialCatalog> {
    let mut file = File::open(path).map_err(|e| {
        CatalogError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| {
        CatalogError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let contents = String::from_utf8(bytes).map_err(|e| {
        CatalogError::serialization(format!("Invalid UTF-8 in {}: {}", path.display(), e))
    })?;

    MaterialCatalog::from_json_str(&contents).map_err(|e| match e {
        CatalogError::SerializationError { reason } => {
            CatalogError::serialization(format!("Invalid JSON in {}: {}", path.display(), reason))
        }
        other => other,
    })
}

/// Save a catalog to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize catalog to JSON
/// 2. Write to a temporary file (`<name>.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename over the target
pub fn save_catalog(catalog: &MaterialCatalog, path: &Path) -> CatalogResult<()> {
    let json = catalog.to_json_string()?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CatalogError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    let written = tmp_file
        .write_all(json.as_bytes())
        .and_then(|_| tmp_file.write_all(b"\n"))
        .and_then(|_| tmp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(CatalogError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        ));
    }
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CatalogError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// `materials.json` -> `materials.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_catalog_path(name: &str) -> PathBuf {
        temp_dir().join(format!("matdb_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/data/materials.json"));
        assert_eq!(tmp, Path::new("/data/materials.json.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_catalog_path("roundtrip");
        let catalog = MaterialCatalog::bundled().unwrap();

        save_catalog(catalog, &path).unwrap();
        let loaded = load_catalog(&path).unwrap();
        assert_eq!(&loaded, catalog);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_catalog_path("atomic");
        let catalog = MaterialCatalog::bundled().unwrap();

        save_catalog(catalog, &path).unwrap();
        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let path = temp_catalog_path("does_not_exist");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::FileError { ref operation, .. } if operation == "open"
        ));
    }

    #[test]
    fn test_invalid_json_names_file() {
        let path = temp_catalog_path("garbage");
        fs::write(&path, "not json").unwrap();

        let err = load_catalog(&path).unwrap_err();
        match err {
            CatalogError::SerializationError { reason } => {
                assert!(reason.contains(&path.display().to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_utf8_names_file() {
        let path = temp_catalog_path("latin1");
        fs::write(&path, b"[\xff]").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        match err {
            CatalogError::SerializationError { reason } => {
                assert!(reason.starts_with("Invalid UTF-8 in "));
                assert!(reason.contains(&path.display().to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_schema_error_from_file() {
        let path = temp_catalog_path("duplicate");
        let first = MaterialCatalog::bundled().unwrap().records()[0].clone();
        let json = serde_json::to_string(&vec![first.clone(), first]).unwrap();
        fs::write(&path, json).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_MATERIAL");

        let _ = fs::remove_file(&path);
    }
}
