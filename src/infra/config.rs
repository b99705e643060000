use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Synchronous generic-text summary route of the remote service.
pub const DEFAULT_ENDPOINT: &str =
    "https://proxy.api.deepaffects.com/text/generic/api/v1/sync/summary";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything the summary client needs to talk to the remote API.
/// Built once per invocation and passed in explicitly.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

/// Optional on-disk settings, `talksum.yml` in the working directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Resolve configuration from `talksum.yml` (if present) and the
    /// environment. `TALKSUM_API_KEY` is required; `TALKSUM_ENDPOINT` and
    /// `TALKSUM_TIMEOUT_SECS` override the file.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("talksum.yml"))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let file = Self::read_file(config_path)?;

        let api_key = std::env::var("TALKSUM_API_KEY").context(
            "No API key found. Set the TALKSUM_API_KEY environment variable:\n  \
             export TALKSUM_API_KEY=your-key",
        )?;

        let endpoint = std::env::var("TALKSUM_ENDPOINT")
            .ok()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = std::env::var("TALKSUM_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            endpoint,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    fn read_file(config_path: &Path) -> Result<FileConfig> {
        if !config_path.exists() {
            return Ok(FileConfig::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: FileConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("invalid config in {}", config_path.display()))?;
        Ok(config)
    }
}
