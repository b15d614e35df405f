//! # Materials Database
//!
//! Reference properties for common structural materials: steel grades,
//! concrete mixes, alloys, composites, timber and masonry.
//!
//! ## Stored Format
//!
//! The catalog is a JSON array of flat objects:
//!
//! ```json
//! {
//!     "Material": "Structural Steel (S235)",
//!     "Density": 7850,
//!     "Yield Strength": 235,
//!     "Ultimate Strength": 360,
//!     "Elastic Modulus": 210,
//!     "Poisson Ratio": 0.3,
//!     "Thermal Expansion": 12e-6,
//!     "Description": "..."
//! }
//! ```
//!
//! Units are kg/m³, MPa, MPa, GPa, dimensionless and strain per °C.
//!
//! ## Example
//!
//! ```rust
//! use matdb_core::materials::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::bundled()?;
//! for material in catalog.all() {
//!     println!("{}: E = {} GPa", material.material, material.elastic_modulus_gpa);
//! }
//! # Ok::<(), matdb_core::errors::CatalogError>(())
//! ```

pub mod catalog;
pub mod property;
pub mod record;
pub mod schema;

pub use catalog::{MaterialCatalog, PropertyRange, BUNDLED_JSON};
pub use property::{Property, UnknownProperty};
pub use record::{KeyProperties, MaterialRecord};
