// src/config/options.rs
use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, URL_ENV_VAR};

/// Everything the fetch step needs, passed in explicitly.
/// No process-global URL or header state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl FetchOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: s!(DEFAULT_USER_AGENT),
        }
    }

    /// Target URL from the environment (the deployment convention).
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        match env::var(URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url.trim())),
            _ => Err(format!("{} is not set", URL_ENV_VAR).into()),
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }
    pub fn delim(&self) -> char {
        match self {
            OutputFormat::Csv => ',',
            OutputFormat::Tsv => '\t',
        }
    }
}

/// CLI output options. `out = None` prints to stdout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            out: None,
            include_headers: false,
        }
    }
}
