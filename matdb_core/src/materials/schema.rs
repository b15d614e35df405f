//! Schema validation for the stored catalog format
//!
//! Records are checked field by field from the raw JSON tree rather than via
//! `serde` derive, so each failure can name the record and key involved.
//! Validation stops at the first error and never corrects values.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Value};

use super::property::Property;
use super::record::MaterialRecord;
use crate::errors::{CatalogError, CatalogResult, SchemaError};

/// Stored text keys
pub const MATERIAL_KEY: &str = "Material";
pub const DESCRIPTION_KEY: &str = "Description";

/// Parse and validate catalog text.
///
/// Unlike [`validate_document`], this sees the text before `serde_json`
/// merges repeated keys, so a record that names a field twice is rejected.
pub fn validate_text(json: &str) -> CatalogResult<Vec<MaterialRecord>> {
    let doc: Value =
        serde_json::from_str(json).map_err(|e| CatalogError::serialization(e.to_string()))?;
    let entries = as_entries(&doc)?;

    let repeated = serde_json::from_str::<RepeatedKeys>(json)
        .map_err(|e| CatalogError::serialization(e.to_string()))?;

    Ok(validate_entries(entries, &repeated.0)?)
}

/// Validate a parsed JSON document and build the typed records.
///
/// Returns the records in stored order. Repeated keys are already merged in
/// a `Value`; use [`validate_text`] to reject them.
pub fn validate_document(doc: &Value) -> Result<Vec<MaterialRecord>, SchemaError> {
    validate_entries(as_entries(doc)?, &[])
}

fn as_entries(doc: &Value) -> Result<&[Value], SchemaError> {
    doc.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| SchemaError::NotAnArray {
            found: json_type_name(doc).to_string(),
        })
}

fn validate_entries(
    entries: &[Value],
    repeated: &[Option<String>],
) -> Result<Vec<MaterialRecord>, SchemaError> {
    let mut records = Vec::with_capacity(entries.len());
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let obj = entry.as_object().ok_or_else(|| SchemaError::NotAnObject {
            index,
            found: json_type_name(entry).to_string(),
        })?;

        // Borrow the name from the document so the map outlives `record`
        let name = obj.get(MATERIAL_KEY).and_then(Value::as_str);

        if let Some(field) = repeated.get(index).and_then(Option::as_deref) {
            return Err(SchemaError::DuplicateField {
                index,
                material: name.map(str::to_string),
                field: field.to_string(),
            });
        }

        let record = validate_record(index, obj)?;

        let name = name.unwrap_or_default();
        if let Some(&first_index) = seen.get(name) {
            return Err(SchemaError::DuplicateMaterial {
                material: record.material,
                first_index,
                duplicate_index: index,
            });
        }
        seen.insert(name, index);
        records.push(record);
    }

    Ok(records)
}

/// First key written twice in each array entry, by entry index
struct RepeatedKeys(Vec<Option<String>>);

impl<'de> Deserialize<'de> for RepeatedKeys {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RepeatedKeysVisitor)
    }
}

struct RepeatedKeysVisitor;

impl<'de> Visitor<'de> for RepeatedKeysVisitor {
    type Value = RepeatedKeys;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON array of records")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut keys = Vec::new();
        while let Some(EntryKeys(repeated)) = seq.next_element()? {
            keys.push(repeated);
        }
        Ok(RepeatedKeys(keys))
    }
}

/// Repeated key of one entry; non-object entries have none
struct EntryKeys(Option<String>);

impl<'de> Deserialize<'de> for EntryKeys {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryKeysVisitor)
    }
}

struct EntryKeysVisitor;

impl<'de> Visitor<'de> for EntryKeysVisitor {
    type Value = EntryKeys;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut seen = HashSet::new();
        let mut repeated = None;
        while let Some(key) = map.next_key::<String>()? {
            map.next_value::<IgnoredAny>()?;
            if repeated.is_none() && !seen.insert(key.clone()) {
                repeated = Some(key);
            }
        }
        Ok(EntryKeys(repeated))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(EntryKeys(None))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(EntryKeys(None))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(EntryKeys(None))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(EntryKeys(None))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(EntryKeys(None))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(EntryKeys(None))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(EntryKeys(None))
    }
}

/// Validate a single record object.
pub fn validate_record(
    index: usize,
    obj: &Map<String, Value>,
) -> Result<MaterialRecord, SchemaError> {
    let material = required_text(index, None, obj, MATERIAL_KEY)?;
    let name = Some(material.as_str());

    if let Some(key) = obj.keys().find(|k| !is_known_key(k)) {
        return Err(SchemaError::UnknownField {
            index,
            material: Some(material.clone()),
            field: key.clone(),
        });
    }

    let mut values = [0.0_f64; 6];
    for (slot, prop) in values.iter_mut().zip(Property::ALL) {
        let value = required_number(index, name, obj, prop.field_name())?;
        if !(value.is_finite() && value > 0.0) {
            return Err(SchemaError::NonPositive {
                index,
                material: material.clone(),
                field: prop.field_name().to_string(),
                value,
            });
        }
        *slot = value;
    }
    let [
        density,
        yield_strength,
        ultimate_strength,
        elastic_modulus,
        poisson_ratio,
        thermal_expansion,
    ] = values;

    if ultimate_strength < yield_strength {
        return Err(SchemaError::StrengthOrder {
            index,
            material: material.clone(),
            yield_strength,
            ultimate_strength,
        });
    }

    let description = required_text(index, name, obj, DESCRIPTION_KEY)?;

    Ok(MaterialRecord {
        material,
        density_kg_m3: density,
        yield_strength_mpa: yield_strength,
        ultimate_strength_mpa: ultimate_strength,
        elastic_modulus_gpa: elastic_modulus,
        poisson_ratio,
        thermal_expansion_per_c: thermal_expansion,
        description,
    })
}

fn is_known_key(key: &str) -> bool {
    key == MATERIAL_KEY || key == DESCRIPTION_KEY || Property::from_field_name(key).is_some()
}

fn required_field<'a>(
    index: usize,
    material: Option<&str>,
    obj: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a Value, SchemaError> {
    obj.get(field).ok_or_else(|| SchemaError::MissingField {
        index,
        material: material.map(str::to_string),
        field: field.to_string(),
    })
}

fn required_text(
    index: usize,
    material: Option<&str>,
    obj: &Map<String, Value>,
    field: &str,
) -> Result<String, SchemaError> {
    let value = required_field(index, material, obj, field)?;
    let text = value.as_str().ok_or_else(|| SchemaError::WrongType {
        index,
        material: material.map(str::to_string),
        field: field.to_string(),
        expected: "a string".to_string(),
        found: json_type_name(value).to_string(),
    })?;

    if text.trim().is_empty() {
        return Err(SchemaError::EmptyText {
            index,
            material: material.map(str::to_string),
            field: field.to_string(),
        });
    }
    Ok(text.to_string())
}

fn required_number(
    index: usize,
    material: Option<&str>,
    obj: &Map<String, Value>,
    field: &str,
) -> Result<f64, SchemaError> {
    let value = required_field(index, material, obj, field)?;
    value.as_f64().ok_or_else(|| SchemaError::WrongType {
        index,
        material: material.map(str::to_string),
        field: field.to_string(),
        expected: "a number".to_string(),
        found: json_type_name(value).to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
