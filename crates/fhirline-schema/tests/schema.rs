use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Field, Fields, Float64Type};
use fhirline_schema::{arrow_schema_from_rows, record_batch_from_rows, SchemaError};
use serde_json::{json, Value};

fn field(name: &str, data_type: DataType) -> Field {
    Field::new(name, data_type, true)
}

fn utf8(name: &str) -> Field {
    field(name, DataType::Utf8)
}

fn strukt(fields: Vec<Field>) -> DataType {
    DataType::Struct(Fields::from(fields))
}

fn list(item: DataType) -> DataType {
    DataType::List(Arc::new(Field::new("item", item, true)))
}

fn coding() -> DataType {
    strukt(vec![
        utf8("id"),
        utf8("code"),
        utf8("display"),
        utf8("system"),
        field("userSelected", DataType::Boolean),
        utf8("version"),
    ])
}

fn codeable_concept() -> DataType {
    strukt(vec![utf8("id"), field("coding", list(coding())), utf8("text")])
}

fn schema_for(resource_type: &str, rows: &[Value]) -> arrow::datatypes::Schema {
    arrow_schema_from_rows(resource_type, rows).unwrap()
}

fn type_of<'a>(schema: &'a arrow::datatypes::Schema, name: &str) -> &'a DataType {
    schema.field_with_name(name).unwrap().data_type()
}

#[test]
fn wide_schema_without_rows() {
    let schema = schema_for("Patient", &[]);
    let names: Vec<_> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(
        names,
        [
            "resourceType",
            "id",
            "implicitRules",
            "language",
            "meta",
            "contained",
            "extension",
            "modifierExtension",
            "text",
            "active",
            "address",
            "birthDate",
            "communication",
            "contact",
            "deceasedBoolean",
            "deceasedDateTime",
            "gender",
            "generalPractitioner",
            "identifier",
            "link",
            "managingOrganization",
            "maritalStatus",
            "multipleBirthBoolean",
            "multipleBirthInteger",
            "name",
            "photo",
            "telecom",
        ]
    );
    assert!(schema.fields().iter().all(|f| f.is_nullable()));

    assert_eq!(type_of(&schema, "id"), &DataType::Utf8);
    assert_eq!(type_of(&schema, "deceasedBoolean"), &DataType::Boolean);
    assert_eq!(type_of(&schema, "multipleBirthInteger"), &DataType::Int32);

    // Only primitives one level down
    assert_eq!(
        type_of(&schema, "text"),
        &strukt(vec![utf8("id"), utf8("div"), utf8("status")])
    );
    assert_eq!(
        type_of(&schema, "communication"),
        &list(strukt(vec![
            utf8("id"),
            field("preferred", DataType::Boolean)
        ]))
    );
    assert_eq!(
        type_of(&schema, "contained"),
        &list(strukt(vec![
            utf8("id"),
            utf8("implicitRules"),
            utf8("language")
        ]))
    );
}

#[test]
fn observed_fields_are_included_and_expanded() {
    let rows = [
        json!({"stage": [{"type": {"coding": [{"version": "1.0"}]}}]}),
        json!({"onsetRange": {"low": {"value": 1.0}}}),
    ];
    let schema = schema_for("Condition", &rows);

    // Top-level CodeableConcept: always complete
    assert_eq!(type_of(&schema, "code"), &codeable_concept());

    // Unobserved structs below the first level are dropped
    assert_eq!(
        type_of(&schema, "evidence"),
        &list(strukt(vec![utf8("id")]))
    );

    // Any observed piece of a CodeableConcept brings all of it
    assert_eq!(
        type_of(&schema, "stage"),
        &list(strukt(vec![
            utf8("id"),
            field("type", codeable_concept())
        ]))
    );

    // Other types only get what was observed
    assert_eq!(
        type_of(&schema, "onsetRange"),
        &strukt(vec![
            utf8("id"),
            field("low", strukt(vec![field("value", DataType::Float64)])),
        ])
    );
}

#[test]
fn decimals_are_float64_even_from_integers() {
    let rows = [
        json!({"quantityQuantity": {"value": 1}}),
        json!({"quantityRange": {"low": {"value": 2}}}),
    ];
    let schema = schema_for("ServiceRequest", &rows);

    let DataType::Struct(quantity) = type_of(&schema, "quantityQuantity") else {
        panic!("quantityQuantity is not a struct");
    };
    let (_, value) = quantity.find("value").unwrap();
    assert_eq!(value.data_type(), &DataType::Float64);

    assert_eq!(
        type_of(&schema, "quantityRange"),
        &strukt(vec![
            utf8("id"),
            field("low", strukt(vec![field("value", DataType::Float64)])),
        ])
    );
}

#[test]
fn unknown_fields_are_ignored() {
    let schema = schema_for("Observation", &[json!({"invalid_field": "nope"})]);
    assert!(schema.field_with_name("invalid_field").is_err());
}

#[test]
fn contained_resources_are_unioned() {
    let rows = [json!({
        "resourceType": "Observation",
        "contained": [
            {"resourceType": "Practitioner", "id": "p1", "name": [{"family": "F"}]},
            {"resourceType": "Medication", "code": {"text": "aspirin"}},
        ],
    })];
    let schema = schema_for("Observation", &rows);

    assert_eq!(
        type_of(&schema, "contained"),
        &list(strukt(vec![
            field("code", codeable_concept()),
            utf8("id"),
            field("name", list(strukt(vec![utf8("family")]))),
            utf8("resourceType"),
        ]))
    );
    // Position is unchanged
    assert_eq!(schema.index_of("contained").unwrap(), 5);
}

#[test]
fn contained_basic_keeps_its_code() {
    let rows = [json!({
        "contained": [{"resourceType": "Basic", "id": "b", "code": {"text": "x"}}],
    })];
    let schema = schema_for("Condition", &rows);
    assert_eq!(
        type_of(&schema, "contained"),
        &list(strukt(vec![
            field("code", codeable_concept()),
            utf8("id"),
            utf8("resourceType"),
        ]))
    );
}

#[test]
fn contained_device_keeps_its_elements() {
    let rows = [json!({
        "resourceType": "Observation",
        "contained": [{
            "resourceType": "Device",
            "status": "active",
            "udiCarrier": [{"deviceIdentifier": "00844588003288"}],
        }],
    })];
    let schema = schema_for("Observation", &rows);
    assert_eq!(
        type_of(&schema, "contained"),
        &list(strukt(vec![
            utf8("resourceType"),
            utf8("status"),
            field("udiCarrier", list(strukt(vec![utf8("deviceIdentifier")]))),
        ]))
    );
}

#[test]
fn unknown_contained_type_uses_resource_elements() {
    let rows = [json!({"contained": [{"resourceType": "Spaceship", "id": "s", "warp": 9}]})];
    let schema = schema_for("Condition", &rows);
    assert_eq!(
        type_of(&schema, "contained"),
        &list(strukt(vec![utf8("id"), utf8("resourceType")]))
    );
}

#[test]
fn device_schema_is_wide() {
    let schema = schema_for("Device", &[]);
    assert_eq!(type_of(&schema, "status"), &DataType::Utf8);
    assert_eq!(
        type_of(&schema, "udiCarrier"),
        &list(strukt(vec![
            utf8("id"),
            utf8("carrierAIDC"),
            utf8("carrierHRF"),
            utf8("deviceIdentifier"),
            utf8("entryType"),
            utf8("issuer"),
            utf8("jurisdiction"),
        ]))
    );
}

#[test]
fn bundle_has_no_domain_elements() {
    let rows = [json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [{"fullUrl": "urn:uuid:1"}],
    })];
    let schema = schema_for("Bundle", &rows);
    assert_eq!(type_of(&schema, "type"), &DataType::Utf8);
    assert!(schema.field_with_name("entry").is_ok());
    assert!(schema.field_with_name("contained").is_err());
    assert!(schema.field_with_name("text").is_err());
}

#[test]
fn sunder_fields_follow_their_element() {
    let rows = [json!({
        "birthDate": "2000-01-01",
        "_birthDate": {"extension": [{"url": "http://example.com/x", "valueCode": "masked"}]},
        "name": [{"given": ["A", "B"], "_given": [null, {"id": "g2"}]}],
    })];
    let schema = schema_for("Patient", &rows);

    let birth = schema.index_of("birthDate").unwrap();
    assert_eq!(schema.field(birth + 1).name(), "_birthDate");
    assert_eq!(
        type_of(&schema, "_birthDate"),
        &strukt(vec![field(
            "extension",
            list(strukt(vec![utf8("url"), utf8("valueCode")]))
        )])
    );

    let DataType::List(name) = type_of(&schema, "name") else {
        panic!("name is not a list");
    };
    let DataType::Struct(name) = name.data_type() else {
        panic!("name items are not structs");
    };
    let (_, given) = name.find("_given").unwrap();
    assert_eq!(given.data_type(), &list(strukt(vec![utf8("id")])));
}

#[test]
fn unknown_resource_type() {
    let err = arrow_schema_from_rows("Spaceship", []).unwrap_err();
    assert!(matches!(err, SchemaError::UnknownResourceType(ref t) if t == "Spaceship"));

    // Abstract bases are not resources of their own
    assert!(arrow_schema_from_rows("DomainResource", []).is_err());
}

#[test]
fn rows_decode_against_inferred_schema() {
    let rows = vec![
        json!({
            "resourceType": "Condition",
            "id": "1",
            "onsetRange": {"low": {"value": 1}},
            "code": {"coding": [{"code": "c1"}]},
            "bogus": true,
        }),
        json!({"resourceType": "Condition", "id": "2"}),
    ];
    let schema = Arc::new(schema_for("Condition", &rows));
    let batch = record_batch_from_rows(schema.clone(), &rows).unwrap();

    assert_eq!(batch.num_rows(), 2);
    assert_eq!(batch.schema(), schema);

    let ids = batch.column_by_name("id").unwrap().as_string::<i32>();
    assert_eq!(ids.value(0), "1");
    assert_eq!(ids.value(1), "2");

    let onset = batch.column_by_name("onsetRange").unwrap().as_struct();
    let low = onset.column_by_name("low").unwrap().as_struct();
    let value = low.column_by_name("value").unwrap().as_primitive::<Float64Type>();
    assert_eq!(value.value(0), 1.0);
    assert!(onset.is_null(1));
}

#[test]
fn no_rows_make_an_empty_batch() {
    let schema = Arc::new(schema_for("Patient", &[]));
    let batch = record_batch_from_rows(schema, &[]).unwrap();
    assert_eq!(batch.num_rows(), 0);
    assert_eq!(batch.num_columns(), 27);
}
