pub mod config;
pub mod convert;
pub mod get;
pub mod ls;
pub mod schema;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use fhirline_core::ResourceFilter;

/// Table with the house style and a cyan header
pub(crate) fn styled_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}

/// Print a key-value summary table on stderr
pub(crate) fn print_summary(title: &str, rows: &[(&str, String)]) {
    let mut table = styled_table(&[title, "Value"]);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    eprintln!("\n{table}");
}

/// No `--type` flags means any type
pub(crate) fn resource_filter(types: &[String]) -> ResourceFilter {
    if types.is_empty() {
        ResourceFilter::Any
    } else {
        types.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_type_list_matches_anything() {
        let filter = resource_filter(&[]);
        assert!(filter.matches(Some("Patient")));
        assert!(filter.matches(None));
    }

    #[test]
    fn type_list_restricts() {
        let filter = resource_filter(&["Patient".to_string(), "Condition".to_string()]);
        assert!(filter.matches(Some("Condition")));
        assert!(!filter.matches(Some("Encounter")));
    }
}
