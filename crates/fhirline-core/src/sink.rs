//! Parquet output, one file per converted batch

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::RecordBatch;
use arrow::datatypes::SchemaRef;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::WriterProperties;

/// Rows per parquet row group
const ROW_GROUP_SIZE: usize = 64 * 1024;

/// `<ResourceType>.<part>.parquet`, part zero-padded to three digits
pub fn part_file_name(resource_type: &str, part: usize) -> String {
    format!("{resource_type}.{part:03}.parquet")
}

/// Parquet writer that lands atomically: rows go to `<name>.tmp` and are
/// renamed into place by [`ParquetSink::finish`]
pub struct ParquetSink {
    writer: ArrowWriter<File>,
    tmp_path: PathBuf,
    final_path: PathBuf,
    rows: usize,
}

impl std::fmt::Debug for ParquetSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParquetSink")
            .field("final_path", &self.final_path)
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}

impl ParquetSink {
    pub fn create(
        output_dir: &Path,
        resource_type: &str,
        part: usize,
        schema: SchemaRef,
        zstd_level: i32,
    ) -> io::Result<Self> {
        let name = part_file_name(resource_type, part);
        let final_path = output_dir.join(&name);
        let tmp_path = output_dir.join(format!("{name}.tmp"));

        let level = ZstdLevel::try_new(zstd_level)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let props = WriterProperties::builder()
            .set_compression(Compression::ZSTD(level))
            .set_max_row_group_size(ROW_GROUP_SIZE)
            .build();

        let file = File::create(&tmp_path)?;
        let writer = ArrowWriter::try_new(file, schema, Some(props)).map_err(io::Error::other)?;
        Ok(Self {
            writer,
            tmp_path,
            final_path,
            rows: 0,
        })
    }

    pub fn write(&mut self, batch: &RecordBatch) -> io::Result<()> {
        self.writer.write(batch).map_err(io::Error::other)?;
        self.rows += batch.num_rows();
        Ok(())
    }

    /// Write the footer and move the file into place. Returns the final path
    /// and row count.
    pub fn finish(self) -> io::Result<(PathBuf, usize)> {
        self.writer.close().map_err(io::Error::other)?;
        fs::rename(&self.tmp_path, &self.final_path)?;
        Ok((self.final_path, self.rows))
    }
}

/// Write a single batch as part `part` of `resource_type`
pub fn write_part(
    output_dir: &Path,
    resource_type: &str,
    part: usize,
    batch: &RecordBatch,
    zstd_level: i32,
) -> io::Result<PathBuf> {
    let mut sink = ParquetSink::create(
        output_dir,
        resource_type,
        part,
        Arc::clone(&batch.schema()),
        zstd_level,
    )?;
    sink.write(batch)?;
    let (path, _) = sink.finish()?;
    Ok(path)
}

/// Remove `*.tmp` leftovers from an interrupted run
pub fn cleanup_tmp_files(output_dir: &Path) -> io::Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(output_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "tmp") {
            log::warn!("Removing stale tmp file: {}", path.display());
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int32Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use tempfile::TempDir;

    fn batch() -> RecordBatch {
        let schema = Schema::new(vec![
            Field::new("resourceType", DataType::Utf8, true),
            Field::new("multipleBirthInteger", DataType::Int32, true),
        ]);
        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(StringArray::from(vec!["Patient", "Patient"])),
                Arc::new(Int32Array::from(vec![Some(2), None])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn part_names() {
        assert_eq!(part_file_name("Patient", 0), "Patient.000.parquet");
        assert_eq!(part_file_name("Condition", 12), "Condition.012.parquet");
        assert_eq!(part_file_name("Observation", 1234), "Observation.1234.parquet");
    }

    #[test]
    fn write_part_lands_atomically() {
        let dir = TempDir::new().unwrap();
        let path = write_part(dir.path(), "Patient", 3, &batch(), 3).unwrap();

        assert_eq!(path, dir.path().join("Patient.003.parquet"));
        assert!(!dir.path().join("Patient.003.parquet.tmp").exists());

        let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path).unwrap())
            .unwrap()
            .build()
            .unwrap();
        let rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(rows, 2);
    }

    #[test]
    fn bad_zstd_level_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = write_part(dir.path(), "Patient", 0, &batch(), 99).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn cleanup_removes_only_tmp() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Patient.000.parquet.tmp"), b"stale").unwrap();
        std::fs::write(dir.path().join("Patient.001.parquet"), b"keep").unwrap();

        assert_eq!(cleanup_tmp_files(dir.path()).unwrap(), 1);
        assert!(dir.path().join("Patient.001.parquet").exists());
        assert!(!dir.path().join("Patient.000.parquet.tmp").exists());
    }
}
