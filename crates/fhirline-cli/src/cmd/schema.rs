//! Schema subcommand - show the inferred schema for one resource type

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use arrow::datatypes::{DataType, Fields, Schema};
use clap::Args;
use fhirline_core::{read_multiline_json_from_dir, ScanOptions};
use fhirline_schema::arrow_schema_from_rows;
use serde_json::Value;

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Directory holding the NDJSON files
    pub dir: PathBuf,

    /// Resource type to describe
    #[arg(short = 't', long = "type")]
    pub resource_type: String,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Rows to sample (0 for the bare wide schema)
    #[arg(long, default_value_t = 1000)]
    pub limit: usize,
}

pub fn run(args: SchemaArgs) -> Result<()> {
    let options = ScanOptions {
        recursive: args.recursive,
        ..Default::default()
    };
    let rows: Vec<Value> =
        read_multiline_json_from_dir(&args.dir, &args.resource_type.as_str().into(), &options)
            .take(args.limit)
            .collect();
    log::info!("Sampled {} {} rows", rows.len(), args.resource_type);

    let schema = arrow_schema_from_rows(&args.resource_type, &rows)
        .with_context(|| format!("Cannot build a schema for {}", args.resource_type))?;
    print!("{}", render_schema(&schema));
    Ok(())
}

/// Indented tree, one field per line
pub fn render_schema(schema: &Schema) -> String {
    let mut out = String::new();
    render_fields(schema.fields(), 0, &mut out);
    out
}

fn render_fields(fields: &Fields, depth: usize, out: &mut String) {
    for field in fields {
        let (label, children) = describe(field.data_type());
        let _ = writeln!(out, "{:indent$}{}: {label}", "", field.name(), indent = depth * 2);
        if let Some(children) = children {
            render_fields(children, depth + 1, out);
        }
    }
}

fn describe(data_type: &DataType) -> (String, Option<&Fields>) {
    match data_type {
        DataType::Struct(fields) => ("struct".to_string(), Some(fields)),
        DataType::List(item) => {
            let (label, children) = describe(item.data_type());
            (format!("list<{label}>"), children)
        }
        DataType::Utf8 => ("string".to_string(), None),
        DataType::Boolean => ("boolean".to_string(), None),
        DataType::Int32 => ("int32".to_string(), None),
        DataType::Float64 => ("float64".to_string(), None),
        other => (other.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::datatypes::Field;

    use super::*;

    #[test]
    fn nested_fields_are_indented() {
        let coding = DataType::Struct(Fields::from(vec![
            Field::new("code", DataType::Utf8, true),
            Field::new("userSelected", DataType::Boolean, true),
        ]));
        let schema = Schema::new(vec![
            Field::new("id", DataType::Utf8, true),
            Field::new(
                "coding",
                DataType::List(Arc::new(Field::new("item", coding, true))),
                true,
            ),
            Field::new("value", DataType::Float64, true),
        ]);

        assert_eq!(
            render_schema(&schema),
            "id: string\n\
             coding: list<struct>\n  \
             code: string\n  \
             userSelected: boolean\n\
             value: float64\n"
        );
    }
}
