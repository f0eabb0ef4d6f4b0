//! Wide Arrow schemas for FHIR resources
//!
//! The schema covers every top-level element of the resource plus one level
//! of nesting, whether or not the batch uses it, so downstream SQL can rely on
//! the columns existing. Deeper elements appear only when the batch has them,
//! except that anything inside a CodeableConcept, Coding, Period, or
//! Reference is expanded in full once any part of it is seen.
//!
//! All fields are nullable. Elements outside the FHIR definition are dropped.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::json::ReaderBuilder;
use arrow::record_batch::RecordBatch;
use serde_json::Value;

use crate::error::SchemaError;
use crate::r4::{self, TypeDefinition};
use crate::shape::Shape;

/// Levels up to this one are included regardless of the batch
const LEVEL_INCLUSION: usize = 1;

/// Starting level for contained resources, so only observed fields appear
const NARROW_LEVEL: usize = 2;

/// Types expanded in full when any part of them is present
const FULL_SCHEMA_TYPES: &[&str] = &["CodeableConcept", "Coding", "Period", "Reference"];

/// Arrow type for a FHIR primitive, or `None` for complex types
pub fn primitive_type(type_code: &str) -> Option<DataType> {
    let data_type = match type_code {
        "boolean" => DataType::Boolean,
        "integer" | "positiveInt" | "unsignedInt" => DataType::Int32,
        "decimal" => DataType::Float64,
        // Dates stay strings, as they appear in the JSON
        "string" | "code" | "id" | "markdown" | "uri" | "url" | "canonical" | "oid" | "uuid"
        | "base64Binary" | "xhtml" | "date" | "dateTime" | "instant" | "time" => DataType::Utf8,
        _ => return None,
    };
    Some(data_type)
}

fn list_of(item: DataType) -> DataType {
    DataType::List(Arc::new(Field::new("item", item, true)))
}

/// Build a schema for `resource_type` that covers every row in the batch.
///
/// `rows` is iterated once.
pub fn arrow_schema_from_rows<'a, I>(resource_type: &str, rows: I) -> Result<Schema, SchemaError>
where
    I: IntoIterator<Item = &'a Value>,
{
    let definition = r4::lookup(resource_type)
        .filter(|def| def.is_resource())
        .ok_or_else(|| SchemaError::UnknownResourceType(resource_type.to_string()))?;

    let mut shape = Shape::new();
    let mut contained_types = BTreeSet::new();
    for row in rows {
        shape.observe(row);
        let contained = row.get("contained").and_then(Value::as_array);
        for item in contained.into_iter().flatten() {
            if let Some(kind) = item
                .get("resourceType")
                .and_then(Value::as_str)
                .filter(|kind| !kind.is_empty())
            {
                contained_types.insert(kind.to_string());
            }
        }
    }

    let mut fields = resource_fields(definition, Some(&shape), 0)?;
    if !contained_types.is_empty() {
        let contained = contained_field(&contained_types, shape.get("contained"))?;
        if let Some(slot) = fields.iter_mut().find(|f| f.name() == "contained") {
            *slot = contained;
        }
    }
    Ok(Schema::new(fields))
}

/// `resourceType` is not an element of any definition but is always present
/// in NDJSON, so it leads every resource schema
fn resource_fields(
    definition: &TypeDefinition,
    shape: Option<&Shape>,
    level: usize,
) -> Result<Vec<Field>, SchemaError> {
    let mut fields = vec![Field::new("resourceType", DataType::Utf8, true)];
    fields.extend(type_fields(definition, shape, level)?);
    Ok(fields)
}

/// Union of every contained resource's observed fields. A field name shared
/// by several types takes the definition of the last type in name order.
fn contained_field(
    types: &BTreeSet<String>,
    shape: Option<&Shape>,
) -> Result<Field, SchemaError> {
    let mut fields = BTreeMap::new();
    for kind in types {
        let definition = match r4::lookup(kind).filter(|def| def.is_resource()) {
            Some(def) => def,
            None => {
                log::debug!("No definition for contained type '{kind}', using Resource");
                r4::lookup("Resource")
                    .ok_or_else(|| SchemaError::UnknownResourceType(kind.clone()))?
            }
        };
        for field in resource_fields(definition, shape, NARROW_LEVEL)? {
            fields.insert(field.name().clone(), field);
        }
    }
    let item = DataType::Struct(fields.into_values().collect());
    Ok(Field::new("contained", list_of(item), true))
}

fn type_fields(
    definition: &TypeDefinition,
    shape: Option<&Shape>,
    level: usize,
) -> Result<Vec<Field>, SchemaError> {
    let expand = FULL_SCHEMA_TYPES.contains(&definition.name);
    let mut fields = Vec::new();

    for property in definition.all_properties() {
        let forced = expand && property.type_code != "Extension";
        let element = Element {
            name: property.json_name,
            type_code: property.type_code,
            is_list: property.is_list(),
        };
        if let Some(field) = element.field(shape, forced, level)? {
            fields.push(field);
        }

        // Primitive extensions live in a sibling "_name" element
        let Some(shape) = shape else { continue };
        let sunder = format!("_{}", property.json_name);
        if shape.contains(&sunder) {
            let element = Element {
                name: &sunder,
                type_code: "Element",
                is_list: property.is_list(),
            };
            if let Some(field) = element.field(Some(shape), false, LEVEL_INCLUSION)? {
                fields.push(field);
            }
        }
    }
    Ok(fields)
}

struct Element<'a> {
    name: &'a str,
    type_code: &'a str,
    is_list: bool,
}

impl Element<'_> {
    /// `None` when the element is left out at this level
    fn field(
        &self,
        parent: Option<&Shape>,
        forced: bool,
        level: usize,
    ) -> Result<Option<Field>, SchemaError> {
        let observed = parent.and_then(|shape| shape.get(self.name));
        let include = observed.is_some() || forced;

        let data_type = match primitive_type(self.type_code) {
            Some(data_type) => {
                if level > LEVEL_INCLUSION && !include {
                    return Ok(None);
                }
                data_type
            }
            None => {
                let definition =
                    r4::lookup(self.type_code).ok_or_else(|| SchemaError::UnsupportedType {
                        element: self.name.to_string(),
                        type_code: self.type_code.to_string(),
                    })?;
                // Stops descent into unobserved structs
                if level >= LEVEL_INCLUSION && !include {
                    return Ok(None);
                }
                let children = type_fields(definition, observed, level + 1)?;
                // Empty structs are rejected by Parquet writers
                if children.is_empty() {
                    return Ok(None);
                }
                DataType::Struct(children.into())
            }
        };

        let data_type = if self.is_list {
            list_of(data_type)
        } else {
            data_type
        };
        Ok(Some(Field::new(self.name, data_type, true)))
    }
}

/// Decode JSON rows against `schema`. Elements the schema lacks are ignored
/// and primitives are coerced where Arrow allows (an integer into a decimal
/// column, a number into a string column).
pub fn record_batch_from_rows(
    schema: SchemaRef,
    rows: &[Value],
) -> Result<RecordBatch, SchemaError> {
    let mut decoder = ReaderBuilder::new(schema.clone())
        .with_batch_size(rows.len().max(1))
        .with_coerce_primitive(true)
        .build_decoder()?;
    decoder.serialize(rows)?;
    Ok(decoder
        .flush()?
        .unwrap_or_else(|| RecordBatch::new_empty(schema)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_mapping() {
        assert_eq!(primitive_type("boolean"), Some(DataType::Boolean));
        assert_eq!(primitive_type("unsignedInt"), Some(DataType::Int32));
        assert_eq!(primitive_type("decimal"), Some(DataType::Float64));
        assert_eq!(primitive_type("dateTime"), Some(DataType::Utf8));
        assert_eq!(primitive_type("Coding"), None);
    }

    #[test]
    fn every_declared_type_resolves() {
        for definition in r4::definitions() {
            for property in definition.properties {
                assert!(
                    primitive_type(property.type_code).is_some()
                        || r4::lookup(property.type_code).is_some(),
                    "{}.{} has unknown type {}",
                    definition.name,
                    property.json_name,
                    property.type_code
                );
            }
        }
    }

    #[test]
    fn undefined_type_is_loud() {
        let element = Element {
            name: "weird",
            type_code: "float128",
            is_list: false,
        };
        let err = element.field(None, false, 0).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnsupportedType { ref element, ref type_code }
                if element == "weird" && type_code == "float128"
        ));
    }

    #[test]
    fn every_resource_builds_wide() {
        for name in r4::RESOURCE_NAMES {
            let schema = arrow_schema_from_rows(name, []).unwrap();
            assert_eq!(schema.field(0).name(), "resourceType");
            assert!(schema.fields().iter().all(|f| f.is_nullable()));
        }
    }
}
