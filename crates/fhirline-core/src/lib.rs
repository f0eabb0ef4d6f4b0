//! Shared plumbing for fhirline: NDJSON discovery and reading, parquet
//! output, logging, and progress display.

pub mod fs;
pub mod logging;
pub mod ndjson;
pub mod progress;
pub mod shutdown;
pub mod sink;

pub use fs::{EntryKind, FileEntry, FileSystem, LocalFileSystem};
pub use logging::{init_logging, Verbosity};
pub use ndjson::{
    list_multiline_json_in_dir, read_multiline_json, read_multiline_json_from_dir,
    read_multiline_json_with_details, LineDetail, ReadOptions, ResourceFilter, ScanOptions,
};
pub use progress::{fmt_num, ProgressContext, SharedProgress};
pub use shutdown::{stop_flag, stop_requested};
pub use sink::{cleanup_tmp_files, part_file_name, write_part, ParquetSink};
