//! Ls subcommand - list NDJSON files by resource type

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color};
use fhirline_core::{list_multiline_json_in_dir, ScanOptions};

use super::{resource_filter, styled_table};

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Directory to scan
    pub dir: PathBuf,

    /// Only list files of this resource type (repeatable)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,
}

pub fn run(args: LsArgs) -> Result<()> {
    let options = ScanOptions {
        recursive: args.recursive,
        ..Default::default()
    };
    let files = list_multiline_json_in_dir(&args.dir, &resource_filter(&args.types), &options);

    if files.is_empty() {
        eprintln!("No NDJSON files found in {}", args.dir.display());
        return Ok(());
    }

    let mut table = styled_table(&["File", "Resource type"]);
    for (path, resource_type) in &files {
        let type_cell = match resource_type {
            Some(t) => Cell::new(t),
            None => Cell::new("unknown").fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(path.display()), type_cell]);
    }
    println!("{table}");
    Ok(())
}
