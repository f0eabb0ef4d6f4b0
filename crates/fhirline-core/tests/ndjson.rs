//! Directory scanning and line reading over local and pluggable filesystems

use std::collections::{BTreeMap, HashMap};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use flate2::write::GzEncoder;
use flate2::Compression;
use fhirline_core::fs::{EntryKind, FileEntry, FileSystem};
use fhirline_core::ndjson::{
    list_multiline_json_in_dir, read_multiline_json, read_multiline_json_from_dir,
    read_multiline_json_with_details, ReadOptions, ResourceFilter, ScanOptions,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn write_gz(path: &Path, content: &str) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

fn canonical(dir: &TempDir) -> PathBuf {
    dir.path().canonicalize().unwrap()
}

fn sample_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("a.ndjson"),
        "{\"resourceType\":\"Patient\",\"id\":\"p1\"}\n{\"resourceType\":\"Patient\",\"id\":\"p2\"}\n",
    )
    .unwrap();
    write_gz(
        &dir.path().join("b.jsonl.gz"),
        "{\"resourceType\":\"Condition\",\"id\":\"c1\"}\n",
    );
    std::fs::write(dir.path().join("readme.txt"), "{\"resourceType\":\"Patient\"}\n").unwrap();
    dir
}

#[test]
fn lists_by_extension_and_first_record() {
    let dir = sample_dir();
    let root = canonical(&dir);

    let found = list_multiline_json_in_dir(dir.path(), &ResourceFilter::Any, &ScanOptions::default());

    let expected = BTreeMap::from([
        (root.join("a.ndjson"), Some("Patient".to_string())),
        (root.join("b.jsonl.gz"), Some("Condition".to_string())),
    ]);
    assert_eq!(found, expected);
    let keys: Vec<_> = found.keys().collect();
    assert_eq!(keys, vec![&root.join("a.ndjson"), &root.join("b.jsonl.gz")]);
}

#[test]
fn filters_by_resource_type() {
    let dir = sample_dir();
    let root = canonical(&dir);
    let opts = ScanOptions::default();

    let patients = list_multiline_json_in_dir(dir.path(), &"Patient".into(), &opts);
    assert_eq!(
        patients,
        BTreeMap::from([(root.join("a.ndjson"), Some("Patient".to_string()))])
    );

    let both: ResourceFilter = ["Condition", "Patient"].into_iter().collect();
    assert_eq!(list_multiline_json_in_dir(dir.path(), &both, &opts).len(), 2);

    let none = list_multiline_json_in_dir(dir.path(), &"Encounter".into(), &opts);
    assert!(none.is_empty());
}

#[test]
fn untyped_and_broken_first_lines() {
    let dir = TempDir::new().unwrap();
    let root = canonical(&dir);
    std::fs::write(dir.path().join("list.jsonl"), "[1, 2]\n").unwrap();
    std::fs::write(dir.path().join("no-type.ndjson"), "{\"id\":\"1\"}\n").unwrap();
    std::fs::write(dir.path().join("broken.ndjson"), "{nope\n").unwrap();
    std::fs::write(dir.path().join("empty.ndjson"), "").unwrap();
    std::fs::write(
        dir.path().join("blank-start.ndjson"),
        "\n\n{\"resourceType\":\"Encounter\"}\n",
    )
    .unwrap();

    let any = list_multiline_json_in_dir(dir.path(), &ResourceFilter::Any, &ScanOptions::default());
    assert_eq!(
        any,
        BTreeMap::from([
            (root.join("blank-start.ndjson"), Some("Encounter".to_string())),
            (root.join("list.jsonl"), None),
            (root.join("no-type.ndjson"), None),
        ])
    );

    // Untyped files never match an explicit filter
    let filtered =
        list_multiline_json_in_dir(dir.path(), &"Encounter".into(), &ScanOptions::default());
    assert_eq!(filtered.len(), 1);
}

#[test]
fn missing_dir_is_empty() {
    let dir = TempDir::new().unwrap();
    let found = list_multiline_json_in_dir(
        &dir.path().join("nope"),
        &ResourceFilter::Any,
        &ScanOptions::default(),
    );
    assert!(found.is_empty());
}

#[test]
fn recursion_is_opt_in() {
    let dir = TempDir::new().unwrap();
    let root = canonical(&dir);
    std::fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
    std::fs::write(dir.path().join("top.ndjson"), "{\"resourceType\":\"Patient\"}\n").unwrap();
    std::fs::write(
        dir.path().join("nested/deeper/low.ndjson"),
        "{\"resourceType\":\"Patient\"}\n",
    )
    .unwrap();

    let flat = list_multiline_json_in_dir(dir.path(), &ResourceFilter::Any, &ScanOptions::default());
    assert_eq!(flat.len(), 1);

    let opts = ScanOptions {
        recursive: true,
        ..Default::default()
    };
    let deep = list_multiline_json_in_dir(dir.path(), &ResourceFilter::Any, &opts);
    assert_eq!(
        deep.keys().cloned().collect::<Vec<_>>(),
        vec![
            root.join("nested/deeper/low.ndjson"),
            root.join("top.ndjson")
        ]
    );
}

#[cfg(unix)]
#[test]
fn symlink_cycles_terminate() {
    let dir = TempDir::new().unwrap();
    let root = canonical(&dir);
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub/x.ndjson"), "{\"resourceType\":\"Patient\"}\n").unwrap();
    std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();
    std::os::unix::fs::symlink(
        dir.path().join("sub/x.ndjson"),
        dir.path().join("alias.ndjson"),
    )
    .unwrap();

    let opts = ScanOptions {
        recursive: true,
        ..Default::default()
    };
    let found = list_multiline_json_in_dir(dir.path(), &ResourceFilter::Any, &opts);
    // The alias resolves to the same target
    assert_eq!(
        found.keys().cloned().collect::<Vec<_>>(),
        vec![root.join("sub/x.ndjson")]
    );
}

#[test]
fn reads_lines_skipping_blank_and_broken() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.ndjson");
    std::fs::write(&path, "{\"id\":\"1\"}\n\n{\"id\":\"2\" BROKEN}\n{\"id\":\"3\"}").unwrap();

    let rows: Vec<Value> = read_multiline_json(&path, None).collect();
    assert_eq!(rows, vec![json!({"id": "1"}), json!({"id": "3"})]);

    // Restart by reopening
    assert_eq!(read_multiline_json(&path, None).count(), 2);
}

#[test]
fn reads_non_object_values_and_gzip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.jsonl.gz");
    write_gz(&path, "1\n\"two\"\r\n[3]\n");

    let rows: Vec<Value> = read_multiline_json(&path, None).collect();
    assert_eq!(rows, vec![json!(1), json!("two"), json!([3])]);
}

#[test]
fn missing_file_reads_empty() {
    let dir = TempDir::new().unwrap();
    assert_eq!(read_multiline_json(&dir.path().join("gone.ndjson"), None).count(), 0);
}

#[test]
fn details_track_lines_and_offsets() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.ndjson");
    // Line 0: 11 bytes, line 1: blank (1 byte), line 2: 11 bytes
    std::fs::write(&path, "{\"id\":\"a\"}\n\n{\"id\":\"b\"}\n").unwrap();

    let details: Vec<_> = read_multiline_json_with_details(&path, ReadOptions::default())
        .map(|d| (d.json, d.line_num, d.byte_offset))
        .collect();
    assert_eq!(
        details,
        vec![(json!({"id": "a"}), 0, 0), (json!({"id": "b"}), 2, 12)]
    );

    // Resuming from the offset of line 2 counts from there
    let resumed: Vec<_> = read_multiline_json_with_details(
        &path,
        ReadOptions {
            offset: 12,
            ..Default::default()
        },
    )
    .map(|d| (d.json, d.line_num, d.byte_offset))
    .collect();
    assert_eq!(resumed, vec![(json!({"id": "b"}), 0, 0)]);
}

#[test]
fn offset_mid_record_resumes_on_next_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.ndjson.gz");
    write_gz(&path, "{\"id\":\"a\"}\n{\"id\":\"b\"}\n");

    let resumed: Vec<_> = read_multiline_json_with_details(
        &path,
        ReadOptions {
            offset: 3,
            ..Default::default()
        },
    )
    .map(|d| (d.json, d.line_num, d.byte_offset))
    .collect();
    // Fragment `d":"a"}` is line 0 (7 bytes + newline) and fails to decode
    assert_eq!(resumed, vec![(json!({"id": "b"}), 1, 8)]);
}

#[test]
fn reads_whole_dir_in_file_order() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("2.ndjson"),
        "{\"resourceType\":\"Patient\",\"id\":\"c\"}\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("1.ndjson"),
        "{\"resourceType\":\"Patient\",\"id\":\"a\"}\n{\"resourceType\":\"Patient\",\"id\":\"b\"}\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("3.ndjson"),
        "{\"resourceType\":\"Condition\",\"id\":\"x\"}\n",
    )
    .unwrap();

    let ids: Vec<String> =
        read_multiline_json_from_dir(dir.path(), &"Patient".into(), &ScanOptions::default())
            .map(|row| row["id"].as_str().unwrap().to_string())
            .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

/// In-memory store with explicit link entries, standing in for an object store
#[derive(Default)]
struct MemoryFs {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: Vec<PathBuf>,
    links: HashMap<PathBuf, PathBuf>,
}

impl MemoryFs {
    fn entry(&self, path: &Path) -> Option<FileEntry> {
        if let Some(target) = self.links.get(path) {
            Some(FileEntry::link(path, target))
        } else if self.files.contains_key(path) {
            Some(FileEntry::file(path))
        } else if self.dirs.iter().any(|d| d == path) {
            Some(FileEntry::directory(path))
        } else {
            None
        }
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.entry(path).is_some()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn info(&self, path: &Path) -> io::Result<FileEntry> {
        self.entry(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn list(&self, path: &Path, recursive: bool) -> io::Result<Vec<FileEntry>> {
        let all = self
            .files
            .keys()
            .chain(self.dirs.iter())
            .chain(self.links.keys());
        Ok(all
            .filter(|p| {
                if recursive {
                    p.starts_with(path) && p.as_path() != path
                } else {
                    p.parent() == Some(path)
                }
            })
            .filter_map(|p| self.entry(p))
            .collect())
    }

    fn open(
        &self,
        path: &Path,
        offset: u64,
        _read_ahead: Option<usize>,
    ) -> io::Result<Box<dyn Read + Send>> {
        let data = self
            .files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))?;
        let start = (offset as usize).min(data.len());
        Ok(Box::new(io::Cursor::new(data[start..].to_vec())))
    }
}

fn memory_fs() -> Arc<MemoryFs> {
    let mut fs = MemoryFs::default();
    fs.dirs.push(PathBuf::from("/bucket"));
    fs.dirs.push(PathBuf::from("/bucket/sub"));
    fs.dirs.push(PathBuf::from("/other"));
    fs.files.insert(
        PathBuf::from("/bucket/pat.ndjson"),
        b"{\"resourceType\":\"Patient\",\"id\":\"1\"}\n".to_vec(),
    );
    fs.files.insert(
        PathBuf::from("/bucket/sub/con.jsonl"),
        b"{\"resourceType\":\"Condition\",\"id\":\"2\"}\n".to_vec(),
    );
    fs.files.insert(
        PathBuf::from("/other/enc.ndjson"),
        b"{\"resourceType\":\"Encounter\",\"id\":\"3\"}\n".to_vec(),
    );
    // A link to a file elsewhere, and a link back to the root (a cycle)
    fs.links.insert(
        PathBuf::from("/bucket/enc-link.ndjson"),
        PathBuf::from("../other/enc.ndjson"),
    );
    fs.links
        .insert(PathBuf::from("/bucket/sub/up"), PathBuf::from(".."));
    Arc::new(fs)
}

#[test]
fn pluggable_fs_flat_listing_follows_file_links() {
    let fs = memory_fs();
    let opts = ScanOptions {
        recursive: false,
        filesystem: Some(fs),
    };
    let found = list_multiline_json_in_dir(Path::new("/bucket"), &ResourceFilter::Any, &opts);
    assert_eq!(
        found,
        BTreeMap::from([
            (PathBuf::from("/bucket/pat.ndjson"), Some("Patient".to_string())),
            (PathBuf::from("/other/enc.ndjson"), Some("Encounter".to_string())),
        ])
    );
}

#[test]
fn pluggable_fs_recursive_listing_survives_cycles() {
    let fs = memory_fs();
    let opts = ScanOptions {
        recursive: true,
        filesystem: Some(fs.clone()),
    };
    let found = list_multiline_json_in_dir(Path::new("/bucket"), &ResourceFilter::Any, &opts);
    assert_eq!(
        found.keys().cloned().collect::<Vec<_>>(),
        vec![
            PathBuf::from("/bucket/pat.ndjson"),
            PathBuf::from("/bucket/sub/con.jsonl"),
            PathBuf::from("/other/enc.ndjson"),
        ]
    );

    let rows: Vec<Value> =
        read_multiline_json_from_dir(Path::new("/bucket"), &"Condition".into(), &opts).collect();
    assert_eq!(rows, vec![json!({"resourceType": "Condition", "id": "2"})]);
    assert_eq!(fs.info(Path::new("/bucket/sub")).unwrap().kind, EntryKind::Directory);
}
