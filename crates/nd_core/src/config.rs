//! Portal configuration.
//!
//! Values come from an optional JSON file; command line flags override the
//! file, and the file overrides the defaults below.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, Result};

/// Upper bound for the per-question quiz clock, in seconds.
pub const MAX_QUIZ_TIME_LIMIT: u32 = 3600;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub widgets: WidgetConfig,
}

impl PortalConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        info!("⚙️ Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.source != CatalogSourceKind::Builtin && self.catalog.location.is_none() {
            return Err(Error::Config(format!(
                "catalog source '{}' needs a location",
                self.catalog.source
            )));
        }
        if !(1..=MAX_QUIZ_TIME_LIMIT).contains(&self.widgets.quiz_time_limit) {
            return Err(Error::Config(format!(
                "quiz_time_limit must be between 1 and {} seconds",
                MAX_QUIZ_TIME_LIMIT
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    #[default]
    Builtin,
    Json,
    Http,
}

impl fmt::Display for CatalogSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Builtin => "builtin",
            Self::Json => "json",
            Self::Http => "http",
        };
        f.write_str(name)
    }
}

impl FromStr for CatalogSourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "builtin" | "memory" => Ok(Self::Builtin),
            "json" | "file" => Ok(Self::Json),
            "http" | "https" => Ok(Self::Http),
            other => Err(Error::Config(format!("unknown catalog source: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: CatalogSourceKind,
    /// File path for `json`, URL for `http`.
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

/// Timings for the simulated widgets. Delays are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub chat_reply_delay_ms: u64,
    pub podcast_line_delay_ms: u64,
    pub podcast_line_jitter_ms: u64,
    pub podcast_reply_delay_ms: u64,
    pub group_chat_delay_ms: u64,
    pub group_chat_jitter_ms: u64,
    /// Seconds per quiz question.
    pub quiz_time_limit: u32,
    /// Fixes listener counts, speakers and delays when set.
    pub seed: Option<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_reply_delay_ms: 1000,
            podcast_line_delay_ms: 3000,
            podcast_line_jitter_ms: 2000,
            podcast_reply_delay_ms: 2500,
            group_chat_delay_ms: 8000,
            group_chat_jitter_ms: 7000,
            quiz_time_limit: 15,
            seed: None,
        }
    }
}

impl WidgetConfig {
    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn podcast_reply_delay(&self) -> Duration {
        Duration::from_millis(self.podcast_reply_delay_ms)
    }
}
