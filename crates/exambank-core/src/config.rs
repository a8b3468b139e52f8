//! Generator configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::builder::{RecordBuilder, DEFAULT_TOPICS};
use crate::emitter::EmitOptions;

/// Top-level exambank configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExambankConfig {
    /// Where `generate` writes the document.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Allocated ids start at `id_base + 1`.
    #[serde(default = "default_id_base")]
    pub id_base: u32,
    /// Pretty-print the document.
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Accepted topics. An empty list accepts any topic.
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("questions_data.json")
}
fn default_id_base() -> u32 {
    1000
}
fn default_true() -> bool {
    true
}
fn default_topics() -> Vec<String> {
    DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
}

impl Default for ExambankConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            id_base: default_id_base(),
            pretty: true,
            topics: default_topics(),
        }
    }
}

impl ExambankConfig {
    pub fn record_builder(&self) -> RecordBuilder {
        RecordBuilder::with_topics(self.topics.iter().cloned())
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            pretty: self.pretty,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `exambank.toml` in the current directory
/// 2. `~/.config/exambank/config.toml`
///
/// Environment variable overrides: `EXAMBANK_OUTPUT`, `EXAMBANK_ID_BASE`.
pub fn load_config_from(path: Option<&Path>) -> Result<ExambankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("exambank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ExambankConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ExambankConfig::default(),
    };

    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(
    mut config: ExambankConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<ExambankConfig> {
    if let Some(output) = var("EXAMBANK_OUTPUT") {
        config.output = PathBuf::from(output);
    }
    if let Some(base) = var("EXAMBANK_ID_BASE") {
        config.id_base = base
            .trim()
            .parse()
            .with_context(|| format!("invalid EXAMBANK_ID_BASE: '{base}'"))?;
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("exambank"))
}
