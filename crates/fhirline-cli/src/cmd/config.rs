//! Config subcommand - show the effective configuration

use anyhow::Result;
use comfy_table::Cell;

use super::styled_table;
use crate::config::Config;

fn secret(value: &Option<String>) -> String {
    match value {
        Some(_) => "configured".to_string(),
        None => "not set".to_string(),
    }
}

fn plain(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "not set".to_string())
}

pub fn run(config: &Config) -> Result<()> {
    let delays = config
        .server
        .retry_delays
        .iter()
        .map(|d| format!("{d}m"))
        .collect::<Vec<_>>()
        .join(", ");
    let rows = [
        ("server.url", plain(&config.server.url)),
        (
            "server.max_connections",
            config
                .server
                .max_connections
                .map_or_else(|| "default (5)".to_string(), |n| n.to_string()),
        ),
        ("server.retry_delays", delays),
        ("server.timeout_secs", config.server.timeout_secs.to_string()),
        ("auth.method", config.auth.method().to_string()),
        ("auth.smart_client_id", plain(&config.auth.smart_client_id)),
        ("auth.smart_key", secret(&config.auth.smart_key)),
        ("auth.basic_user", plain(&config.auth.basic_user)),
        ("auth.basic_password", secret(&config.auth.basic_password)),
        ("auth.bearer_token", secret(&config.auth.bearer_token)),
        ("auth.token_url", plain(&config.auth.token_url)),
        (
            "convert.output_dir",
            config.convert.output_dir.display().to_string(),
        ),
        ("convert.batch_size", config.convert.batch_size.to_string()),
        ("convert.zstd_level", config.convert.zstd_level.to_string()),
    ];

    let mut table = styled_table(&["Setting", "Value"]);
    for (setting, value) in rows {
        table.add_row(vec![Cell::new(setting), Cell::new(value)]);
    }
    println!("{table}");
    Ok(())
}
