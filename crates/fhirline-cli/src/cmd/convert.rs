//! Convert subcommand - NDJSON to Parquet, one schema per batch

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::{Cell, Color};
use fhirline_core::progress::finish_resource_line;
use fhirline_core::{
    cleanup_tmp_files, fmt_num, list_multiline_json_in_dir, read_multiline_json, stop_requested,
    write_part, ScanOptions, SharedProgress,
};
use fhirline_schema::{arrow_schema_from_rows, record_batch_from_rows};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde_json::Value;

use super::{print_summary, resource_filter, styled_table};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory holding the NDJSON files
    pub input: PathBuf,

    /// Output directory [default: from config]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only convert this resource type (repeatable)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Rows per Parquet part [default: from config]
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Zstd compression level [default: from config]
    #[arg(long)]
    pub zstd_level: Option<i32>,
}

/// Settings shared by every resource type in a run
#[derive(Clone, Debug)]
struct ConvertPlan {
    output_dir: PathBuf,
    batch_size: usize,
    zstd_level: i32,
}

/// Outcome for one resource type
#[derive(Debug)]
struct TypeSummary {
    resource_type: String,
    files: usize,
    rows: usize,
    parts: usize,
    error: Option<String>,
}

pub fn run(args: ConvertArgs, config: &Config, progress: &SharedProgress) -> Result<()> {
    let plan = ConvertPlan {
        output_dir: args
            .output
            .unwrap_or_else(|| config.convert.output_dir.clone()),
        batch_size: args.batch_size.unwrap_or(config.convert.batch_size).max(1),
        zstd_level: args.zstd_level.unwrap_or(config.convert.zstd_level),
    };

    log::info!("Converting {}", args.input.display());
    log::info!("  Output: {}", plan.output_dir.display());

    let options = ScanOptions {
        recursive: args.recursive,
        ..Default::default()
    };
    let files = list_multiline_json_in_dir(&args.input, &resource_filter(&args.types), &options);
    let summaries = convert_files(files, &plan, progress)?;

    let mut table = styled_table(&["Resource type", "Files", "Rows", "Parts", "Status"]);
    for summary in &summaries {
        let status = match &summary.error {
            None => Cell::new("ok").fg(Color::Green),
            Some(e) => Cell::new(e).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&summary.resource_type),
            Cell::new(summary.files),
            Cell::new(fmt_num(summary.rows)),
            Cell::new(summary.parts),
            status,
        ]);
    }
    eprintln!("\n{table}");

    let total_rows: usize = summaries.iter().map(|s| s.rows).sum();
    print_summary(
        "Convert",
        &[
            ("Resource types", summaries.len().to_string()),
            ("Rows", fmt_num(total_rows)),
            ("Output", plan.output_dir.display().to_string()),
        ],
    );

    let failed = summaries.iter().filter(|s| s.error.is_some()).count();
    if failed > 0 {
        bail!("{failed} resource type(s) failed to convert");
    }
    if stop_requested() {
        bail!("Interrupted");
    }
    Ok(())
}

/// Convert each resource type in parallel. A failure in one type does not
/// stop the others.
fn convert_files(
    files: BTreeMap<PathBuf, Option<String>>,
    plan: &ConvertPlan,
    progress: &SharedProgress,
) -> Result<Vec<TypeSummary>> {
    std::fs::create_dir_all(&plan.output_dir)
        .with_context(|| format!("Failed to create {}", plan.output_dir.display()))?;
    cleanup_tmp_files(&plan.output_dir)?;

    let mut by_type: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for (path, resource_type) in files {
        match resource_type {
            Some(t) => by_type.entry(t).or_default().push(path),
            None => log::warn!("Skipping {}: no resourceType", path.display()),
        }
    }

    let summaries = by_type
        .par_iter()
        .map(|(resource_type, files)| {
            let pb = progress.resource_line(resource_type);
            let result = convert_type(resource_type, files, plan, &pb);
            finish_resource_line(&pb, files.len());
            let (rows, parts, error) = match result {
                Ok((rows, parts)) => (rows, parts, None),
                Err(e) => {
                    log::error!("{resource_type}: {e:#}");
                    (0, 0, Some(format!("{e:#}")))
                }
            };
            TypeSummary {
                resource_type: resource_type.clone(),
                files: files.len(),
                rows,
                parts,
                error,
            }
        })
        .collect();
    Ok(summaries)
}

/// Returns rows written and parts written
fn convert_type(
    resource_type: &str,
    files: &[PathBuf],
    plan: &ConvertPlan,
    pb: &ProgressBar,
) -> Result<(usize, usize)> {
    let mut rows = 0;
    let mut part = 0;
    let mut batch: Vec<Value> = Vec::with_capacity(plan.batch_size);

    let records = files
        .iter()
        .flat_map(|file| read_multiline_json(file, None));
    for record in records {
        if record.get("resourceType").and_then(Value::as_str) != Some(resource_type) {
            log::debug!("Skipping a non-{resource_type} record");
            continue;
        }
        batch.push(record);
        if batch.len() >= plan.batch_size {
            if stop_requested() {
                log::warn!("{resource_type}: stopping early");
                return Ok((rows, part));
            }
            rows += write_batch(resource_type, &batch, part, plan)?;
            part += 1;
            pb.inc(batch.len() as u64);
            batch.clear();
        }
    }

    // Always leave at least one part so the table exists downstream
    if !batch.is_empty() || part == 0 {
        rows += write_batch(resource_type, &batch, part, plan)?;
        part += 1;
        pb.inc(batch.len() as u64);
    }
    Ok((rows, part))
}

fn write_batch(
    resource_type: &str,
    batch: &[Value],
    part: usize,
    plan: &ConvertPlan,
) -> Result<usize> {
    let schema = Arc::new(arrow_schema_from_rows(resource_type, batch)?);
    let records = record_batch_from_rows(schema, batch)?;
    let path = write_part(&plan.output_dir, resource_type, part, &records, plan.zstd_level)
        .with_context(|| format!("Failed to write part {part} of {resource_type}"))?;
    log::debug!("Wrote {} rows to {}", records.num_rows(), path.display());
    Ok(records.num_rows())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use fhirline_core::ProgressContext;
    use tempfile::TempDir;

    use super::*;

    fn plan(output_dir: &Path, batch_size: usize) -> ConvertPlan {
        ConvertPlan {
            output_dir: output_dir.to_path_buf(),
            batch_size,
            zstd_level: 3,
        }
    }

    fn scan(dir: &Path) -> BTreeMap<PathBuf, Option<String>> {
        list_multiline_json_in_dir(dir, &resource_filter(&[]), &ScanOptions::default())
    }

    #[test]
    fn converts_each_type_into_parts() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(
            input.path().join("Patient.ndjson"),
            concat!(
                r#"{"resourceType": "Patient", "id": "p1", "gender": "female"}"#,
                "\n",
                r#"{"resourceType": "Patient", "id": "p2"}"#,
                "\n\n",
                r#"{"resourceType": "Patient", "id": "p3", "birthDate": "1990-01-01"}"#,
                "\n",
            ),
        )
        .unwrap();
        fs::write(
            input.path().join("Condition.jsonl"),
            r#"{"resourceType": "Condition", "id": "c1", "onsetRange": {"low": {"value": 3}}}"#,
        )
        .unwrap();
        fs::write(input.path().join("notes.txt"), "not json").unwrap();

        let progress = Arc::new(ProgressContext::new());
        let summaries =
            convert_files(scan(input.path()), &plan(output.path(), 2), &progress).unwrap();

        let by_type: BTreeMap<_, _> = summaries
            .iter()
            .map(|s| (s.resource_type.as_str(), (s.files, s.rows, s.parts)))
            .collect();
        assert_eq!(by_type["Patient"], (1, 3, 2));
        assert_eq!(by_type["Condition"], (1, 1, 1));
        assert!(summaries.iter().all(|s| s.error.is_none()));

        for name in [
            "Patient.000.parquet",
            "Patient.001.parquet",
            "Condition.000.parquet",
        ] {
            assert!(output.path().join(name).exists(), "{name} missing");
        }
        assert!(!output.path().join("Patient.002.parquet").exists());
    }

    #[test]
    fn mismatched_records_are_skipped() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(
            input.path().join("mixed.ndjson"),
            concat!(
                r#"{"resourceType": "Encounter", "id": "e1"}"#,
                "\n",
                r#"{"resourceType": "Patient", "id": "p1"}"#,
                "\n",
            ),
        )
        .unwrap();

        let progress = Arc::new(ProgressContext::new());
        let summaries =
            convert_files(scan(input.path()), &plan(output.path(), 100), &progress).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].resource_type, "Encounter");
        assert_eq!(summaries[0].rows, 1);
    }

    #[test]
    fn unknown_type_fails_alone() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(
            input.path().join("a.ndjson"),
            r#"{"resourceType": "Spaceship", "id": "s1"}"#,
        )
        .unwrap();
        fs::write(
            input.path().join("b.ndjson"),
            r#"{"resourceType": "Patient", "id": "p1"}"#,
        )
        .unwrap();

        let progress = Arc::new(ProgressContext::new());
        let summaries =
            convert_files(scan(input.path()), &plan(output.path(), 100), &progress).unwrap();
        let spaceship = summaries
            .iter()
            .find(|s| s.resource_type == "Spaceship")
            .unwrap();
        assert!(spaceship.error.as_deref().unwrap().contains("Spaceship"));
        assert!(output.path().join("Patient.000.parquet").exists());
    }

    #[test]
    fn stale_tmp_files_are_removed() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(output.path().join("Patient.000.parquet.tmp"), b"stale").unwrap();

        let progress = Arc::new(ProgressContext::new());
        let summaries =
            convert_files(scan(input.path()), &plan(output.path(), 100), &progress).unwrap();
        assert!(summaries.is_empty());
        assert!(!output.path().join("Patient.000.parquet.tmp").exists());
    }
}
