//! Numeric property selector
//!
//! `Property` names one of the six numeric columns of a material record and
//! knows the exact key it is stored under.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One numeric field of a [`MaterialRecord`](super::MaterialRecord)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Density (kg/m³)
    #[serde(rename = "Density")]
    Density,
    /// Yield strength (MPa)
    #[serde(rename = "Yield Strength")]
    YieldStrength,
    /// Ultimate strength (MPa)
    #[serde(rename = "Ultimate Strength")]
    UltimateStrength,
    /// Elastic modulus (GPa)
    #[serde(rename = "Elastic Modulus")]
    ElasticModulus,
    /// Poisson ratio (dimensionless)
    #[serde(rename = "Poisson Ratio")]
    PoissonRatio,
    /// Coefficient of thermal expansion (strain per °C)
    #[serde(rename = "Thermal Expansion")]
    ThermalExpansion,
}

impl Property {
    /// All properties, in stored field order
    pub const ALL: [Property; 6] = [
        Property::Density,
        Property::YieldStrength,
        Property::UltimateStrength,
        Property::ElasticModulus,
        Property::PoissonRatio,
        Property::ThermalExpansion,
    ];

    /// The mechanical properties carried by
    /// [`KeyProperties`](super::KeyProperties), in stored order
    pub const KEY: [Property; 5] = [
        Property::Density,
        Property::YieldStrength,
        Property::UltimateStrength,
        Property::ElasticModulus,
        Property::PoissonRatio,
    ];

    /// Key used in the stored JSON format
    pub fn field_name(&self) -> &'static str {
        match self {
            Property::Density => "Density",
            Property::YieldStrength => "Yield Strength",
            Property::UltimateStrength => "Ultimate Strength",
            Property::ElasticModulus => "Elastic Modulus",
            Property::PoissonRatio => "Poisson Ratio",
            Property::ThermalExpansion => "Thermal Expansion",
        }
    }

    /// Display unit
    pub fn unit(&self) -> &'static str {
        match self {
            Property::Density => "kg/m³",
            Property::YieldStrength | Property::UltimateStrength => "MPa",
            Property::ElasticModulus => "GPa",
            Property::PoissonRatio => "-",
            Property::ThermalExpansion => "1/°C",
        }
    }

    /// Look up a property by its exact stored key
    pub fn from_field_name(name: &str) -> Option<Self> {
        Property::ALL.into_iter().find(|p| p.field_name() == name)
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Error returned when a string names no known property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProperty(pub String);

impl std::fmt::Display for UnknownProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let known: Vec<&str> = Property::ALL.iter().map(|p| p.field_name()).collect();
        write!(f, "unknown property '{}' (expected one of: {})", self.0, known.join(", "))
    }
}

impl std::error::Error for UnknownProperty {}

impl FromStr for Property {
    type Err = UnknownProperty;

    /// Accepts the stored key ("Yield Strength") or a snake/kebab-case alias
    /// ("yield_strength", "yield-strength"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c.to_ascii_lowercase() })
            .collect();

        Property::ALL
            .into_iter()
            .find(|p| p.field_name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| UnknownProperty(s.to_string()))
    }
}
