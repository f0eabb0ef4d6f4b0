use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Int32Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use fhirline_core::{read_multiline_json, write_part};

fn write_rows(path: &Path, n: usize) {
    let file = std::fs::File::create(path).unwrap();
    let mut out: Box<dyn Write> = if path.extension().is_some_and(|e| e == "gz") {
        Box::new(flate2::write::GzEncoder::new(file, flate2::Compression::fast()))
    } else {
        Box::new(file)
    };
    for i in 0..n {
        writeln!(
            out,
            r#"{{"resourceType":"Patient","id":"p{i}","gender":"female","birthDate":"1970-01-01","name":[{{"family":"Doe","given":["Jane"]}}]}}"#
        )
        .unwrap();
    }
}

#[divan::bench(args = ["rows.ndjson", "rows.ndjson.gz"])]
fn read_ndjson(bencher: divan::Bencher, name: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    write_rows(&path, 10_000);
    bencher.bench(|| read_multiline_json(&path, None).count());
}

fn synthetic_batch(n: usize) -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("resourceType", DataType::Utf8, true),
        Field::new("id", DataType::Utf8, true),
        Field::new("multipleBirthInteger", DataType::Int32, true),
    ]));
    let types = StringArray::from(vec!["Patient"; n]);
    let ids = StringArray::from((0..n).map(|i| format!("p{i}")).collect::<Vec<_>>());
    let births = Int32Array::from((0..n as i32).map(|i| (i % 3 == 0).then_some(i % 4)).collect::<Vec<_>>());
    RecordBatch::try_new(schema, vec![Arc::new(types), Arc::new(ids), Arc::new(births)]).unwrap()
}

#[divan::bench(args = [1, 3, 6])]
fn parquet_write_zstd(bencher: divan::Bencher, zstd_level: i32) {
    let batch = synthetic_batch(8192);
    let dir = tempfile::tempdir().unwrap();
    bencher.bench(|| write_part(dir.path(), "Patient", 0, &batch, zstd_level).unwrap());
}

fn main() {
    divan::main();
}
