use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use explain_engine::{EngineOptions, DEFAULT_MAX_QUERY_CHARS, DEFAULT_MAX_RADICAND};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_FILE: &str = "explain_config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplainConfig {
    /// Largest radicand the square-root pattern accepts.
    pub max_radicand: u64,
    /// Longer queries are rejected before classification.
    pub max_query_chars: usize,
    /// Print step details in text output (titles and results are always shown).
    pub show_details: bool,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            max_radicand: DEFAULT_MAX_RADICAND,
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
            show_details: true,
        }
    }
}

impl ExplainConfig {
    /// Load from an explicit path, or from `explain_config.toml` in the
    /// working directory.
    ///
    /// An explicit path must exist and parse. The implicit file is optional
    /// and falls back to defaults with a warning when it is broken.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            return Self::parse(&content)
                .with_context(|| format!("parsing config file {}", path.display()));
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
            return Ok(Self::default());
        }
        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    warn!("Error parsing config file: {e}. Using defaults.");
                    Ok(Self::default())
                }
            },
            Err(e) => {
                warn!("Error reading config file: {e}. Using defaults.");
                Ok(Self::default())
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            max_radicand: self.max_radicand,
            max_query_chars: self.max_query_chars,
        }
    }
}
