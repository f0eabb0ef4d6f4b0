//! Discover and read multi-line JSON (NDJSON / JSON Lines) files.
//!
//! Bulk FHIR exports arrive under every filename pattern imaginable
//! (`1.Condition.ndjson`, `Condition.001.ndjson`, opaque server IDs), so files
//! are matched by extension only and their resource type is sniffed from the
//! first record.
//!
//! Errors here are logged and skipped, never raised: the input is externally
//! produced and usually large, and one bad line should not sink a batch.
//!
//! Both `.jsonl` and `.ndjson` are accepted (optionally with a trailing `.gz`),
//! and empty lines are skipped.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use flate2::read::MultiGzDecoder;
use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::fs::{EntryKind, FileSystem, LocalFileSystem};

/// Read-ahead when sniffing the first line (enough for one gzip block on
/// remote stores, except for large inlined attachments)
const SNIFF_READ_AHEAD: usize = 9000;

/// Buffer size for full-file reads (256KB)
const READ_BUF_SIZE: usize = 256 * 1024;

const JSON_EXTENSIONS: [&str; 2] = [".jsonl", ".ndjson"];

/// Which resource types a directory scan should keep
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResourceFilter {
    #[default]
    Any,
    Only(BTreeSet<String>),
}

impl ResourceFilter {
    pub fn matches(&self, resource_type: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(types) => resource_type.is_some_and(|t| types.contains(t)),
        }
    }
}

impl From<&str> for ResourceFilter {
    fn from(value: &str) -> Self {
        Self::Only(BTreeSet::from([value.to_string()]))
    }
}

impl From<String> for ResourceFilter {
    fn from(value: String) -> Self {
        Self::Only(BTreeSet::from([value]))
    }
}

impl<T: Into<ResourceFilter>> From<Option<T>> for ResourceFilter {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Into::into)
    }
}

impl<S: Into<String>> FromIterator<S> for ResourceFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::Only(iter.into_iter().map(Into::into).collect())
    }
}

/// Options for directory scans
#[derive(Clone, Default)]
pub struct ScanOptions {
    pub recursive: bool,
    pub filesystem: Option<Arc<dyn FileSystem>>,
}

impl std::fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanOptions")
            .field("recursive", &self.recursive)
            .field("filesystem", &self.filesystem.is_some())
            .finish()
    }
}

/// Options for reading a single file
#[derive(Clone, Default)]
pub struct ReadOptions {
    pub filesystem: Option<Arc<dyn FileSystem>>,
    /// Byte offset (in decompressed bytes) to start reading from
    pub offset: u64,
}

impl std::fmt::Debug for ReadOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadOptions")
            .field("filesystem", &self.filesystem.is_some())
            .field("offset", &self.offset)
            .finish()
    }
}

/// One parsed line plus its position, both counted from the starting offset
#[derive(Clone, Debug, PartialEq)]
pub struct LineDetail {
    pub json: Value,
    pub line_num: usize,
    pub byte_offset: u64,
}

/// List multi-line JSON files in `path` whose first record matches `filter`.
///
/// Returns full paths mapped to the sniffed `resourceType` (`None` when the
/// first record is not an object or lacks one), sorted by path. A missing
/// directory yields an empty map. Local symlinks are followed and their
/// resolved targets are returned.
pub fn list_multiline_json_in_dir(
    path: &Path,
    filter: &ResourceFilter,
    options: &ScanOptions,
) -> BTreeMap<PathBuf, Option<String>> {
    let children = match &options.filesystem {
        Some(fs) => {
            let mut visited = FxHashSet::default();
            list_fs_files(fs.as_ref(), path, options.recursive, &mut visited)
        }
        None => list_local_files(path, options.recursive),
    };

    let fs = options.filesystem.as_deref();
    let mut results = BTreeMap::new();
    for child in children {
        if !is_multiline_json_name(&child) {
            continue;
        }
        if let Some(resource_type) = sniff_resource_type(&child, fs) {
            if filter.matches(resource_type.as_deref()) {
                results.insert(child, resource_type);
            }
        }
    }
    results
}

/// Lazily read every JSON value in `path`, one per non-empty line.
///
/// Each call reopens the file, so calling again restarts from the top.
pub fn read_multiline_json(path: &Path, filesystem: Option<Arc<dyn FileSystem>>) -> JsonLines {
    JsonLines {
        inner: read_multiline_json_with_details(
            path,
            ReadOptions {
                filesystem,
                offset: 0,
            },
        ),
    }
}

/// Like [`read_multiline_json`], but also yields line numbers and byte
/// offsets, and can start at a byte offset (e.g. a saved checkpoint).
///
/// Starting mid-record is tolerated: the partial fragment fails to decode, is
/// logged, and reading resumes at the next line.
pub fn read_multiline_json_with_details(path: &Path, options: ReadOptions) -> DetailedLines {
    DetailedLines {
        path: path.to_path_buf(),
        options,
        state: ReadState::Unopened,
        line_num: 0,
        byte_total: 0,
        buf: Vec::new(),
    }
}

/// Every record of every matching file under `path`, in sorted file order
/// then line order.
pub fn read_multiline_json_from_dir(
    path: &Path,
    filter: &ResourceFilter,
    options: &ScanOptions,
) -> impl Iterator<Item = Value> + Send {
    let filesystem = options.filesystem.clone();
    list_multiline_json_in_dir(path, filter, options)
        .into_keys()
        .flat_map(move |file| read_multiline_json(&file, filesystem.clone()))
}

/// Iterator returned by [`read_multiline_json`]
pub struct JsonLines {
    inner: DetailedLines,
}

impl Iterator for JsonLines {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.inner.next().map(|detail| detail.json)
    }
}

enum ReadState {
    Unopened,
    Open(Box<dyn BufRead + Send>),
    Done,
}

/// Iterator returned by [`read_multiline_json_with_details`]
pub struct DetailedLines {
    path: PathBuf,
    options: ReadOptions,
    state: ReadState,
    line_num: usize,
    byte_total: u64,
    buf: Vec<u8>,
}

impl DetailedLines {
    fn reader(&mut self) -> Option<&mut Box<dyn BufRead + Send>> {
        if matches!(self.state, ReadState::Unopened) {
            let fs = self.options.filesystem.as_deref();
            self.state = match open_reader(&self.path, fs, self.options.offset, None) {
                Ok(reader) => ReadState::Open(reader),
                Err(e) => {
                    log::error!("Could not read from '{}': {e}", self.path.display());
                    ReadState::Done
                }
            };
        }
        match &mut self.state {
            ReadState::Open(reader) => Some(reader),
            _ => None,
        }
    }
}

impl Iterator for DetailedLines {
    type Item = LineDetail;

    fn next(&mut self) -> Option<LineDetail> {
        loop {
            let mut buf = std::mem::take(&mut self.buf);
            buf.clear();
            let read = self.reader()?.read_until(b'\n', &mut buf);
            let n = match read {
                Ok(0) => {
                    self.state = ReadState::Done;
                    return None;
                }
                Ok(n) => n,
                Err(e) => {
                    log::error!("Could not read from '{}': {e}", self.path.display());
                    self.state = ReadState::Done;
                    return None;
                }
            };

            let line_num = self.line_num;
            let byte_offset = self.byte_total;
            self.line_num += 1;
            self.byte_total += n as u64;

            let line = trim_line_ending(&buf);
            if line.is_empty() {
                self.buf = buf;
                continue;
            }
            let parsed = serde_json::from_slice(line);
            self.buf = buf;
            match parsed {
                Ok(json) => {
                    return Some(LineDetail {
                        json,
                        line_num,
                        byte_offset,
                    })
                }
                Err(e) => {
                    log::warn!(
                        "Could not decode '{}:{}': {e}",
                        self.path.display(),
                        line_num + 1
                    );
                }
            }
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && matches!(line[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    &line[..end]
}

fn is_gzip_name(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `*.jsonl`, `*.ndjson`, or either followed by `.gz` (case-insensitive)
pub fn is_multiline_json_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    let stem = name.strip_suffix(".gz").unwrap_or(&name);
    JSON_EXTENSIONS
        .iter()
        .any(|ext| stem.len() > ext.len() && stem.ends_with(ext))
}

/// Open a (possibly gzipped) file at a decompressed byte offset
fn open_reader(
    path: &Path,
    fs: Option<&dyn FileSystem>,
    offset: u64,
    read_ahead: Option<usize>,
) -> io::Result<Box<dyn BufRead + Send>> {
    let fs = fs.unwrap_or(&LocalFileSystem);
    let capacity = read_ahead.unwrap_or(READ_BUF_SIZE);
    if is_gzip_name(path) {
        let raw = fs.open(path, 0, read_ahead)?;
        let mut reader = BufReader::with_capacity(capacity, MultiGzDecoder::new(raw));
        if offset > 0 {
            io::copy(&mut (&mut reader).take(offset), &mut io::sink())?;
        }
        Ok(Box::new(reader))
    } else {
        let raw = fs.open(path, offset, read_ahead)?;
        Ok(Box::new(BufReader::with_capacity(capacity, raw)))
    }
}

/// Sniff the resource type from the first non-empty line.
///
/// `None` means "skip this file"; `Some(None)` means the file is valid JSON
/// lines but the first record carries no resource type.
fn sniff_resource_type(path: &Path, fs: Option<&dyn FileSystem>) -> Option<Option<String>> {
    let parsed = match read_first_line(path, fs) {
        Ok(Some(line)) => serde_json::from_slice::<Value>(&line),
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Could not read from '{}': {e}", path.display());
            return None;
        }
    };
    match parsed {
        Ok(value) => Some(
            value
                .get("resourceType")
                .and_then(Value::as_str)
                .map(str::to_string),
        ),
        Err(e) => {
            log::warn!("Could not read from '{}': {e}", path.display());
            None
        }
    }
}

fn read_first_line(path: &Path, fs: Option<&dyn FileSystem>) -> io::Result<Option<Vec<u8>>> {
    let mut reader = open_reader(path, fs, 0, Some(SNIFF_READ_AHEAD))?;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = trim_line_ending(&buf);
        if !line.is_empty() {
            return Ok(Some(line.to_vec()));
        }
    }
}

/// Regular files under `root`, resolved through symlinks
fn list_local_files(root: &Path, recursive: bool) -> BTreeSet<PathBuf> {
    let mut results = BTreeSet::new();
    if !root.exists() {
        return results;
    }

    let mut visited = FxHashSet::default();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(canonical) = dir.canonicalize() else {
            continue;
        };
        if !visited.insert(canonical) {
            continue; // link cycle
        }
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Could not list '{}': {e}", dir.display());
                continue;
            }
        };
        for entry in entries.flatten() {
            let full = entry.path();
            let Ok(resolved) = full.canonicalize() else {
                continue; // dangling link
            };
            if resolved.is_file() {
                results.insert(resolved);
            } else if recursive && resolved.is_dir() {
                pending.push(full);
            }
        }
    }
    results
}

/// Regular files under `path` on a pluggable filesystem, following links by
/// their reported destination
fn list_fs_files(
    fs: &dyn FileSystem,
    path: &Path,
    recursive: bool,
    visited: &mut FxHashSet<PathBuf>,
) -> BTreeSet<PathBuf> {
    let mut results = BTreeSet::new();
    if !fs.exists(path) {
        return results;
    }

    let items = if !visited.is_empty() && !recursive {
        // Following a link in flat mode: only the target itself matters
        fs.info(path).map(|entry| vec![entry])
    } else {
        fs.list(path, recursive)
    };
    let items = match items {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Could not list '{}': {e}", path.display());
            return results;
        }
    };

    for entry in items {
        if let Some(target) = &entry.link_target {
            let parent = entry.path.parent().unwrap_or_else(|| Path::new(""));
            let resolved = normalize(&parent.join(target));
            if !visited.insert(resolved.clone()) {
                continue;
            }
            if fs.is_file(&resolved) {
                results.insert(resolved);
            } else {
                results.extend(list_fs_files(fs, &resolved, recursive, visited));
            }
        } else if entry.kind == EntryKind::File {
            results.insert(entry.path);
        }
    }
    results
}

/// Lexically collapse `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiline_json_names() {
        assert!(is_multiline_json_name(Path::new("/x/a.ndjson")));
        assert!(is_multiline_json_name(Path::new("/x/a.JSONL")));
        assert!(is_multiline_json_name(Path::new("/x/1.Condition.ndjson.gz")));
        assert!(is_multiline_json_name(Path::new("b.jsonl.GZ")));
        assert!(!is_multiline_json_name(Path::new("/x/readme.txt")));
        assert!(!is_multiline_json_name(Path::new("/x/a.json")));
        assert!(!is_multiline_json_name(Path::new("/x/a.gz")));
        assert!(!is_multiline_json_name(Path::new("/x/a.ndjson.zip")));
        assert!(!is_multiline_json_name(Path::new("/x/.ndjson")));
    }

    #[test]
    fn filter_matching() {
        assert!(ResourceFilter::Any.matches(None));
        assert!(ResourceFilter::Any.matches(Some("Patient")));

        let only: ResourceFilter = ["Condition", "Patient"].into_iter().collect();
        assert!(only.matches(Some("Patient")));
        assert!(!only.matches(Some("Encounter")));
        assert!(!only.matches(None));

        assert_eq!(ResourceFilter::from(None::<&str>), ResourceFilter::Any);
        assert_eq!(
            ResourceFilter::from(Some("Patient")),
            ResourceFilter::from("Patient")
        );
    }

    #[test]
    fn trims_crlf() {
        assert_eq!(trim_line_ending(b"{}\r\n"), b"{}");
        assert_eq!(trim_line_ending(b"\n"), b"");
        assert_eq!(trim_line_ending(b"{}"), b"{}");
    }

    #[test]
    fn normalize_collapses_dots() {
        assert_eq!(normalize(Path::new("/a/b/../c/./d")), PathBuf::from("/a/c/d"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }
}
