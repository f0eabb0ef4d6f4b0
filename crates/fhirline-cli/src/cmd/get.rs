//! Get subcommand - fetch one URL from a FHIR server

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use fhirline_client::{
    AuthConfig, CliAuthArgs, ClientOptions, FhirClient, NoHooks, RequestOptions, RetryPlan,
};
use reqwest::Method;

use crate::config::Config;

/// Credential flags. Secrets may be given inline or as a path to a file.
#[derive(Args, Debug, Default)]
pub struct AuthArgs {
    /// SMART client ID
    #[arg(long)]
    pub smart_client_id: Option<String>,

    /// SMART private key: JWKS or PEM file, or inline JSON
    #[arg(long)]
    pub smart_key: Option<String>,

    #[arg(long)]
    pub basic_user: Option<String>,

    #[arg(long = "basic-passwd")]
    pub basic_password: Option<String>,

    #[arg(long)]
    pub bearer_token: Option<String>,

    /// Token endpoint, when the server does not advertise one
    #[arg(long)]
    pub token_url: Option<String>,
}

impl From<AuthArgs> for CliAuthArgs {
    fn from(args: AuthArgs) -> Self {
        CliAuthArgs {
            smart_client_id: args.smart_client_id,
            smart_key: args.smart_key,
            basic_user: args.basic_user,
            basic_password: args.basic_password,
            bearer_token: args.bearer_token,
            token_url: args.token_url,
        }
    }
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Path relative to the server root (e.g. `Patient/123`), or a full URL
    pub path: String,

    /// FHIR server base URL [default: from config]
    #[arg(long)]
    pub url: Option<String>,

    #[command(flatten)]
    pub auth: AuthArgs,

    /// Resource types to request access to (repeatable)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Minutes between attempts, comma separated [default: from config]
    #[arg(long, value_delimiter = ',')]
    pub retry_delays: Option<Vec<u64>>,

    /// Maximum concurrent connections
    #[arg(long)]
    pub max_connections: Option<usize>,
}

pub fn run(args: GetArgs, config: &Config) -> Result<()> {
    let auth = AuthConfig::from_cli_args(config.auth.fill(args.auth.into()))
        .context("Invalid credentials")?;
    let url = args.url.or_else(|| config.server.url.clone());
    let resources: Vec<String> = if args.types.is_empty() {
        scope_for_path(&args.path).into_iter().collect()
    } else {
        args.types
    };
    let options = ClientOptions {
        max_connections: args.max_connections.or(config.server.max_connections),
        timeout: Duration::from_secs(config.server.timeout_secs),
    };
    let retry = RetryPlan::new(
        args.retry_delays
            .unwrap_or_else(|| config.server.retry_delays.clone()),
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let mut client = FhirClient::new(url.as_deref(), resources, auth, options)?;
    let body = runtime.block_on(fetch(&mut client, &args.path, retry));
    client.close();
    let body = body?;

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{body}"),
    }
    Ok(())
}

async fn fetch(client: &mut FhirClient, path: &str, retry: RetryPlan) -> Result<String> {
    client.open().await?;
    log::debug!("Connected to a {:?} server", client.server_type());

    let options = RequestOptions {
        retry,
        ..Default::default()
    };
    let response = client.request(Method::GET, path, options, &NoHooks).await?;
    Ok(response.text().await?)
}

/// The resource type a relative path points into, for scoping the token
fn scope_for_path(path: &str) -> Option<String> {
    if path.contains("://") {
        return None;
    }
    path.trim_start_matches('/')
        .split(['/', '?'])
        .next()
        .filter(|segment| segment.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_comes_from_first_segment() {
        assert_eq!(scope_for_path("Patient/123").as_deref(), Some("Patient"));
        assert_eq!(scope_for_path("/Condition?code=x").as_deref(), Some("Condition"));
        assert_eq!(scope_for_path("Observation").as_deref(), Some("Observation"));
    }

    #[test]
    fn no_scope_for_urls_or_operations() {
        assert_eq!(scope_for_path("https://example.com/Patient/1"), None);
        assert_eq!(scope_for_path("$export"), None);
        assert_eq!(scope_for_path("metadata"), None);
    }
}
