use std::sync::Arc;

use fhirline_schema::{arrow_schema_from_rows, record_batch_from_rows};
use serde_json::{json, Value};

fn synthetic_conditions(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "resourceType": "Condition",
                "id": format!("c{i}"),
                "subject": {"reference": format!("Patient/p{}", i % 100)},
                "code": {"coding": [{"system": "http://snomed.info/sct", "code": "38341003"}]},
                "onsetDateTime": "2020-01-01",
                "stage": [{"summary": {"text": "mild"}}],
                "_recordedDate": {"extension": [{"url": "http://example.com/x", "valueCode": "masked"}]},
            })
        })
        .collect()
}

#[divan::bench(args = [100, 1000, 10_000])]
fn infer_condition_schema(bencher: divan::Bencher, n: usize) {
    let rows = synthetic_conditions(n);
    bencher.bench(|| arrow_schema_from_rows("Condition", &rows).unwrap());
}

#[divan::bench(args = [1000, 10_000])]
fn decode_condition_rows(bencher: divan::Bencher, n: usize) {
    let rows = synthetic_conditions(n);
    let schema = Arc::new(arrow_schema_from_rows("Condition", &rows).unwrap());
    bencher.bench(|| record_batch_from_rows(schema.clone(), &rows).unwrap());
}

fn main() {
    divan::main();
}
