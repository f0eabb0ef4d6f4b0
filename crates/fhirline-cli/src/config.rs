//! Configuration loading from `fhirline.toml`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fhirline_client::CliAuthArgs;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthSection,
    pub convert: ConvertConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(deserialize_with = "deserialize_env_var")]
    pub url: Option<String>,
    pub max_connections: Option<usize>,
    /// Minutes to wait between attempts
    pub retry_delays: Vec<u64>,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: None,
            retry_delays: vec![1, 1],
            timeout_secs: 300,
        }
    }
}

/// Credentials; each value may be the secret itself, a file path, or `${VAR}`
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthSection {
    #[serde(deserialize_with = "deserialize_env_var")]
    pub smart_client_id: Option<String>,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub smart_key: Option<String>,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub basic_user: Option<String>,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub basic_password: Option<String>,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub bearer_token: Option<String>,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub token_url: Option<String>,
}

impl std::fmt::Debug for AuthSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSection")
            .field("smart_client_id", &self.smart_client_id)
            .field("smart_key", &self.smart_key.is_some())
            .field("basic_user", &self.basic_user)
            .field("basic_password", &self.basic_password.is_some())
            .field("bearer_token", &self.bearer_token.is_some())
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl AuthSection {
    /// Fill in whatever the command line left unset
    pub fn fill(&self, args: CliAuthArgs) -> CliAuthArgs {
        CliAuthArgs {
            smart_client_id: args.smart_client_id.or_else(|| self.smart_client_id.clone()),
            smart_key: args.smart_key.or_else(|| self.smart_key.clone()),
            basic_user: args.basic_user.or_else(|| self.basic_user.clone()),
            basic_password: args.basic_password.or_else(|| self.basic_password.clone()),
            bearer_token: args.bearer_token.or_else(|| self.bearer_token.clone()),
            token_url: args.token_url.or_else(|| self.token_url.clone()),
        }
    }

    /// Which credential family is configured, for display
    pub fn method(&self) -> &'static str {
        if self.smart_client_id.is_some() || self.smart_key.is_some() {
            "SMART"
        } else if self.bearer_token.is_some() {
            "bearer"
        } else if self.basic_user.is_some() || self.basic_password.is_some() {
            "basic"
        } else {
            "none"
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub output_dir: PathBuf,
    /// Rows per Parquet part file
    pub batch_size: usize,
    pub zstd_level: i32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./parquet"),
            batch_size: 50_000,
            zstd_level: 3,
        }
    }
}

/// Strings written as `${VAR}` are read from the environment; an unset
/// variable leaves the setting empty
fn deserialize_env_var<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| expand_env_var(&raw)))
}

fn expand_env_var(raw: &str) -> Option<String> {
    match raw.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        Some(name) => std::env::var(name).ok(),
        None => Some(raw.to_owned()),
    }
}

/// `./fhirline.toml`, then the per-user config directory
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("fhirline.toml")];
    if let Some(dirs) = directories::ProjectDirs::from("", "", "fhirline") {
        paths.push(dirs.config_dir().join("config.toml"));
    }
    paths
}

impl Config {
    /// First config file found in the usual places, or the defaults
    pub fn load() -> Result<Self> {
        match candidate_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::from_file(&path),
            None => {
                log::debug!("No fhirline.toml found; using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        log::info!("Using configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server.retry_delays, [1, 1]);
        assert_eq!(config.server.timeout_secs, 300);
        assert_eq!(config.convert.zstd_level, 3);
        assert_eq!(config.auth.method(), "none");
    }

    #[test]
    fn expand_env_var_cases() {
        std::env::set_var("FHIRLINE_TEST_TOKEN", "t0ken");
        assert_eq!(
            expand_env_var("${FHIRLINE_TEST_TOKEN}"),
            Some("t0ken".to_string())
        );
        std::env::remove_var("FHIRLINE_TEST_TOKEN");

        assert_eq!(expand_env_var("plain-value").as_deref(), Some("plain-value"));
        assert_eq!(expand_env_var("${FHIRLINE_NONEXISTENT_12345}"), None);
    }

    #[test]
    fn parse_config_toml() {
        let toml = r#"
[server]
url = "https://fhir.example.com/r4"
max_connections = 8
retry_delays = [1, 5, 10]

[auth]
smart_client_id = "client"
smart_key = "/secrets/key.jwks"

[convert]
batch_size = 1000
zstd_level = 9
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.url.as_deref(), Some("https://fhir.example.com/r4"));
        assert_eq!(config.server.max_connections, Some(8));
        assert_eq!(config.server.retry_delays, [1, 5, 10]);
        assert_eq!(config.server.timeout_secs, 300);
        assert_eq!(config.auth.method(), "SMART");
        assert_eq!(config.convert.batch_size, 1000);
        assert_eq!(config.convert.output_dir, PathBuf::from("./parquet"));
    }

    #[test]
    fn command_line_wins() {
        let section = AuthSection {
            bearer_token: Some("from-file".into()),
            token_url: Some("https://auth.example.com/token".into()),
            ..Default::default()
        };
        let args = section.fill(CliAuthArgs {
            bearer_token: Some("from-flag".into()),
            ..Default::default()
        });
        assert_eq!(args.bearer_token.as_deref(), Some("from-flag"));
        assert_eq!(args.token_url.as_deref(), Some("https://auth.example.com/token"));
        assert!(args.basic_user.is_none());
    }

    #[test]
    fn secrets_hidden_from_debug() {
        let section = AuthSection {
            basic_user: Some("user".into()),
            basic_password: Some("hunter2".into()),
            ..Default::default()
        };
        let shown = format!("{section:?}");
        assert!(shown.contains("user"));
        assert!(!shown.contains("hunter2"));
    }
}
