use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::pipeline::FailurePolicy;

pub const DEFAULT_DATASET_PATH: &str = "data/People.csv";
pub const DEFAULT_ARTIFACT_PATH: &str = "player.jpg";
pub const DEFAULT_BASE_URL: &str = "https://www.baseball-reference.com";
pub const DEFAULT_PAGE_EXT: &str = "shtml";
pub const DEFAULT_API_BASE: &str = "https://api.x.com";

/// Everything a run needs that used to be a hard-coded constant.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    /// Downloaded portrait, overwritten every run.
    pub artifact_path: PathBuf,
    pub base_url: String,
    pub page_ext: String,
    pub http_timeout: Duration,
    pub user_agent: String,
    pub failure_policy: FailurePolicy,
    /// Log the post instead of sending it.
    pub dry_run: bool,
    pub api_base: String,
    pub bearer_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_ext: DEFAULT_PAGE_EXT.to_string(),
            http_timeout: Duration::from_secs(30),
            user_agent: concat!("bbref-bot/", env!("CARGO_PKG_VERSION")).to_string(),
            failure_policy: FailurePolicy::Abort,
            dry_run: false,
            api_base: DEFAULT_API_BASE.to_string(),
            bearer_token: None,
        }
    }
}

impl Config {
    /// Fixed defaults plus run-mode knobs and credentials from the environment (.env honoured).
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();
        let mut config = Self::default();

        if let Ok(policy) = dotenv::var("BBREF_FAILURE_POLICY") {
            config.failure_policy = parse_policy(&policy)?;
        }
        config.dry_run = dotenv::var("BBREF_DRY_RUN")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        if let Ok(base) = dotenv::var("X_API_BASE") {
            if !base.is_empty() {
                config.api_base = base;
            }
        }
        config.bearer_token = dotenv::var("X_BEARER_TOKEN").ok().filter(|t| !t.is_empty());

        if !config.dry_run && config.bearer_token.is_none() {
            bail!("X_BEARER_TOKEN required (or set BBREF_DRY_RUN=1)");
        }

        Ok(config)
    }
}

fn parse_policy(value: &str) -> Result<FailurePolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "abort" | "" => Ok(FailurePolicy::Abort),
        "continue" => Ok(FailurePolicy::Continue),
        other => bail!("Unknown BBREF_FAILURE_POLICY `{}`. Valid: abort, continue", other),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
