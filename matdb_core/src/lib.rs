//! # matdb_core - Structural Materials Catalog
//!
//! `matdb_core` ships a hand-curated reference table of structural materials
//! (steel grades, concrete mixes, alloys, composites, timber, masonry) as
//! typed records, and validates any table in the same format before handing
//! it out.
//!
//! ## Design Philosophy
//!
//! - **Read-only**: a catalog never changes after it is loaded
//! - **All or nothing**: one bad record rejects the whole table
//! - **JSON-First**: records keep the stored key names on the wire
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use matdb_core::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::bundled()?;
//! assert_eq!(catalog.len(), 24);
//!
//! let steel = catalog.find_by_name("Structural Steel (S235)").unwrap();
//! assert_eq!(steel.ultimate_strength_mpa, 360.0);
//! assert!(catalog.find_by_name("Nonexistent Alloy").is_none());
//! # Ok::<(), matdb_core::CatalogError>(())
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Record types, schema validation and the catalog
//! - [`source`] - Choosing between the bundled table and a file
//! - [`errors`] - Structured error types
//! - [`file_io`] - Loading catalog files and atomic exports

pub mod errors;
pub mod file_io;
pub mod materials;
pub mod source;

// Re-export commonly used types at crate root for convenience
pub use errors::{CatalogError, CatalogResult, SchemaError};
pub use file_io::{load_catalog, save_catalog};
pub use materials::{KeyProperties, MaterialCatalog, MaterialRecord, Property, PropertyRange};
pub use source::CatalogSource;
