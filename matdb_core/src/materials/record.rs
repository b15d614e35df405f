//! Material record types
//!
//! A [`MaterialRecord`] is one row of the catalog. Field names on the wire
//! match the stored table exactly (`"Yield Strength"`, `"Poisson Ratio"`, ...).
//! Records are serialized directly but only ever built from JSON through the
//! schema validator.

use serde::{Deserialize, Serialize};

use super::property::Property;

/// One material and its reference properties.
///
/// Records loaded from JSON come from the catalog loader, which guarantees
/// that every numeric field is strictly positive and that
/// `ultimate_strength_mpa >= yield_strength_mpa`. Values built by hand in
/// code carry no such guarantee until they pass
/// [`validate_record`](super::schema::validate_record).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialRecord {
    /// Material name, unique within a catalog
    #[serde(rename = "Material")]
    pub material: String,

    /// Density (kg/m³)
    #[serde(rename = "Density")]
    pub density_kg_m3: f64,

    /// Stress at onset of plastic deformation (MPa)
    #[serde(rename = "Yield Strength")]
    pub yield_strength_mpa: f64,

    /// Maximum stress before failure (MPa)
    #[serde(rename = "Ultimate Strength")]
    pub ultimate_strength_mpa: f64,

    /// Modulus of elasticity (GPa)
    #[serde(rename = "Elastic Modulus")]
    pub elastic_modulus_gpa: f64,

    /// Poisson ratio (dimensionless)
    #[serde(rename = "Poisson Ratio")]
    pub poisson_ratio: f64,

    /// Coefficient of thermal expansion (strain per °C)
    #[serde(rename = "Thermal Expansion")]
    pub thermal_expansion_per_c: f64,

    /// Human-readable summary
    #[serde(rename = "Description")]
    pub description: String,
}

impl MaterialRecord {
    /// Read one numeric property
    pub fn value(&self, property: Property) -> f64 {
        match property {
            Property::Density => self.density_kg_m3,
            Property::YieldStrength => self.yield_strength_mpa,
            Property::UltimateStrength => self.ultimate_strength_mpa,
            Property::ElasticModulus => self.elastic_modulus_gpa,
            Property::PoissonRatio => self.poisson_ratio,
            Property::ThermalExpansion => self.thermal_expansion_per_c,
        }
    }

    /// The mechanical properties a beam or stress solver needs
    pub fn key_properties(&self) -> KeyProperties {
        KeyProperties {
            material: self.material.clone(),
            density_kg_m3: self.density_kg_m3,
            yield_strength_mpa: self.yield_strength_mpa,
            ultimate_strength_mpa: self.ultimate_strength_mpa,
            elastic_modulus_gpa: self.elastic_modulus_gpa,
            poisson_ratio: self.poisson_ratio,
        }
    }

    /// Whether the Poisson ratio sits in the (0, 0.5) band expected of an
    /// isotropic solid
    pub fn has_isotropic_poisson_ratio(&self) -> bool {
        self.poisson_ratio > 0.0 && self.poisson_ratio < 0.5
    }

    /// Properties on a single line, e.g. for list views
    pub fn summary_line(&self) -> String {
        Property::ALL
            .iter()
            .map(|p| format!("{}: {}", p.field_name(), self.value(*p)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for MaterialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "- {}:", self.material)?;
        for prop in Property::ALL {
            writeln!(f, "   {}: {} {}", prop.field_name(), self.value(prop), prop.unit())?;
        }
        write!(f, "   Description: {}", self.description)
    }
}

/// Subset of a record handed to downstream calculations.
///
/// Thermal expansion and the description are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyProperties {
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(rename = "Density")]
    pub density_kg_m3: f64,
    #[serde(rename = "Yield Strength")]
    pub yield_strength_mpa: f64,
    #[serde(rename = "Ultimate Strength")]
    pub ultimate_strength_mpa: f64,
    #[serde(rename = "Elastic Modulus")]
    pub elastic_modulus_gpa: f64,
    #[serde(rename = "Poisson Ratio")]
    pub poisson_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::schema::validate_record;

    fn s235() -> MaterialRecord {
        MaterialRecord {
            material: "Structural Steel (S235)".to_string(),
            density_kg_m3: 7850.0,
            yield_strength_mpa: 235.0,
            ultimate_strength_mpa: 360.0,
            elastic_modulus_gpa: 210.0,
            poisson_ratio: 0.3,
            thermal_expansion_per_c: 12e-6,
            description: "Mild steel".to_string(),
        }
    }

    #[test]
    fn test_value_accessor() {
        let rec = s235();
        assert_eq!(rec.value(Property::Density), 7850.0);
        assert_eq!(rec.value(Property::YieldStrength), 235.0);
        assert_eq!(rec.value(Property::ThermalExpansion), 12e-6);
    }

    #[test]
    fn test_stored_key_names() {
        let json = serde_json::to_value(s235()).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "Material",
                "Density",
                "Yield Strength",
                "Ultimate Strength",
                "Elastic Modulus",
                "Poisson Ratio",
                "Thermal Expansion",
                "Description",
            ]
        );
    }

    #[test]
    fn test_exponential_and_decimal_agree() {
        let base = serde_json::to_value(s235()).unwrap();
        let mut decimal = base.clone();
        decimal["Thermal Expansion"] = serde_json::from_str("0.000012").unwrap();

        let a = validate_record(0, base.as_object().unwrap()).unwrap();
        let b = validate_record(0, decimal.as_object().unwrap()).unwrap();
        assert_eq!(a.thermal_expansion_per_c, b.thermal_expansion_per_c);
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_properties() {
        let key = s235().key_properties();
        assert_eq!(key.material, "Structural Steel (S235)");
        assert_eq!(key.ultimate_strength_mpa, 360.0);

        let json = serde_json::to_string(&key).unwrap();
        assert!(json.contains("\"Poisson Ratio\":0.3"));
        assert!(!json.contains("Thermal Expansion"));
    }

    #[test]
    fn test_key_properties_follow_property_key() {
        let json = serde_json::to_value(s235().key_properties()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        let mut expected = vec!["Material"];
        expected.extend(Property::KEY.iter().map(|p| p.field_name()));
        assert_eq!(keys, expected);

        let key = s235().key_properties();
        let values = [
            key.density_kg_m3,
            key.yield_strength_mpa,
            key.ultimate_strength_mpa,
            key.elastic_modulus_gpa,
            key.poisson_ratio,
        ];
        for (prop, value) in Property::KEY.into_iter().zip(values) {
            assert_eq!(s235().value(prop), value);
        }
    }

    #[test]
    fn test_display() {
        let text = s235().to_string();
        assert!(text.starts_with("- Structural Steel (S235):\n"));
        assert!(text.contains("   Yield Strength: 235 MPa\n"));
        assert!(text.ends_with("   Description: Mild steel"));
    }

    #[test]
    fn test_summary_line() {
        let line = s235().summary_line();
        assert!(line.starts_with("Density: 7850, Yield Strength: 235"));
    }

    #[test]
    fn test_isotropic_poisson_band() {
        let mut rec = s235();
        assert!(rec.has_isotropic_poisson_ratio());
        rec.poisson_ratio = 0.5;
        assert!(!rec.has_isotropic_poisson_ratio());
    }
}
