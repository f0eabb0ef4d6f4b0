//! Bad input is reported through `log`, once per problem.
//!
//! Kept in its own test binary because it installs a global logger.

use std::sync::Mutex;

use fhirline_core::ndjson::{list_multiline_json_in_dir, read_multiline_json, ResourceFilter, ScanOptions};
use serde_json::json;

struct Capture(Mutex<Vec<(log::Level, String)>>);

impl log::Log for Capture {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.target().starts_with("fhirline_core") {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn one_warning_per_bad_input() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    let dir = tempfile::TempDir::new().unwrap();
    let rows = dir.path().join("rows.ndjson");
    std::fs::write(&rows, "{\"id\":\"1\"}\n{\"id\":\"2\" BROKEN}\n{\"id\":\"3\"}\n").unwrap();

    let values: Vec<_> = read_multiline_json(&rows, None).collect();
    assert_eq!(values, vec![json!({"id": "1"}), json!({"id": "3"})]);
    {
        let seen = CAPTURE.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, log::Level::Warn);
        assert!(seen[0].1.starts_with("Could not decode '"));
        assert!(seen[0].1.contains("rows.ndjson:2'"));
    }
    CAPTURE.0.lock().unwrap().clear();

    // Unreadable first line during a scan
    std::fs::remove_file(&rows).unwrap();
    std::fs::write(dir.path().join("bad.ndjson"), "not json\n").unwrap();
    let found = list_multiline_json_in_dir(dir.path(), &ResourceFilter::Any, &ScanOptions::default());
    assert!(found.is_empty());
    {
        let seen = CAPTURE.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, log::Level::Warn);
    }
    CAPTURE.0.lock().unwrap().clear();

    // Missing file when reading is an error, and yields nothing
    let missing = read_multiline_json(&dir.path().join("gone.ndjson"), None).count();
    assert_eq!(missing, 0);
    let seen = CAPTURE.0.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, log::Level::Error);
}
