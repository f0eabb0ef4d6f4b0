//! Pluggable filesystem for NDJSON discovery and reading
//!
//! The scanner only needs a handful of operations, so remote object stores can
//! be plugged in by implementing [`FileSystem`]. When no filesystem is given,
//! callers fall back to native local semantics (see [`LocalFileSystem`]).

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// What kind of object a listing entry refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// One entry returned by [`FileSystem::list`] or [`FileSystem::info`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Link destination, relative to the entry's parent unless absolute
    pub link_target: Option<PathBuf>,
}

impl FileEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            link_target: None,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            link_target: None,
        }
    }

    pub fn link(path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Other,
            link_target: Some(target.into()),
        }
    }
}

/// Minimal filesystem surface used by the NDJSON scanner and reader.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Describe a single path without following links
    fn info(&self, path: &Path) -> io::Result<FileEntry>;

    /// List children of `path`; with `recursive`, every descendant (links are
    /// reported, not followed)
    fn list(&self, path: &Path, recursive: bool) -> io::Result<Vec<FileEntry>>;

    /// Open raw (still compressed) bytes for reading, starting at `offset`.
    ///
    /// `read_ahead` is a block size hint for stores where each read is a
    /// round trip; local files ignore it.
    fn open(
        &self,
        path: &Path,
        offset: u64,
        read_ahead: Option<usize>,
    ) -> io::Result<Box<dyn Read + Send>>;
}

/// [`FileSystem`] over `std::fs`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileSystem;

fn entry_for(path: PathBuf, metadata: &std::fs::Metadata) -> io::Result<FileEntry> {
    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        let target = std::fs::read_link(&path)?;
        return Ok(FileEntry::link(path, target));
    }
    let kind = if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    };
    Ok(FileEntry {
        path,
        kind,
        link_target: None,
    })
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn info(&self, path: &Path) -> io::Result<FileEntry> {
        let metadata = std::fs::symlink_metadata(path)?;
        entry_for(path.to_path_buf(), &metadata)
    }

    fn list(&self, path: &Path, recursive: bool) -> io::Result<Vec<FileEntry>> {
        let mut entries = Vec::new();
        let mut pending = vec![path.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for child in std::fs::read_dir(&dir)? {
                let child = child?;
                let entry = entry_for(child.path(), &child.metadata()?)?;
                if recursive && entry.kind == EntryKind::Directory {
                    pending.push(entry.path.clone());
                }
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    fn open(
        &self,
        path: &Path,
        offset: u64,
        _read_ahead: Option<usize>,
    ) -> io::Result<Box<dyn Read + Send>> {
        let mut file = File::open(path)?;
        if offset > 0 {
            file.seek(SeekFrom::Start(offset))?;
        }
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn local_list_flat_and_recursive() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.ndjson"), b"{}").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/b.ndjson"), b"{}").unwrap();

        let fs = LocalFileSystem;
        let mut flat: Vec<_> = fs
            .list(dir.path(), false)
            .unwrap()
            .into_iter()
            .map(|e| (e.path, e.kind))
            .collect();
        flat.sort();
        assert_eq!(
            flat,
            vec![
                (dir.path().join("a.ndjson"), EntryKind::File),
                (dir.path().join("sub"), EntryKind::Directory),
            ]
        );

        let deep = fs.list(dir.path(), true).unwrap();
        assert!(deep
            .iter()
            .any(|e| e.path == dir.path().join("sub/b.ndjson") && e.kind == EntryKind::File));
    }

    #[cfg(unix)]
    #[test]
    fn local_info_reports_links() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("real.ndjson"), b"{}").unwrap();
        std::os::unix::fs::symlink("real.ndjson", dir.path().join("alias.ndjson")).unwrap();

        let info = LocalFileSystem.info(&dir.path().join("alias.ndjson")).unwrap();
        assert_eq!(info.link_target, Some(PathBuf::from("real.ndjson")));
    }

    #[test]
    fn local_open_at_offset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.ndjson");
        std::fs::write(&path, b"0123456789").unwrap();

        let mut reader = LocalFileSystem.open(&path, 4, Some(9000)).unwrap();
        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "456789");
    }
}
