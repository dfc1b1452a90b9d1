//! Backend Configuration
//!
//! Connection settings for the hosted auth + table service. A CSR bundle has
//! no runtime environment, so values are baked in at build time.

use log::LevelFilter;
use reqwest::Url;

use crate::error::ConfigError;

const DEFAULT_TABLE: &str = "todos";

/// Where the backend lives and how to identify this client to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project URL, always ending in `/`
    pub base_url: Url,
    /// Public anon key sent as `apikey`
    pub anon_key: String,
    /// Table holding todo rows
    pub table: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let trimmed = url.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
        let base_url = Url::parse(&normalized).map_err(|source| ConfigError::InvalidUrl {
            value: url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url,
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
        })
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Read `SUPABASE_URL`, `SUPABASE_ANON_KEY` and `SUPABASE_TODO_TABLE`
    /// from the environment the bundle was compiled in.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
            option_env!("SUPABASE_TODO_TABLE"),
        )
    }

    fn from_values(
        url: Option<&str>,
        anon_key: Option<&str>,
        table: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = url.filter(|v| !v.trim().is_empty()).ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let anon_key = anon_key
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;
        let config = Self::new(url, anon_key.trim())?;
        Ok(match table.map(str::trim).filter(|t| !t.is_empty()) {
            Some(table) => config.with_table(table),
            None => config,
        })
    }
}

/// Console log level from `SUPATODO_LOG`, defaulting to `info`
pub fn log_level_from_build_env() -> LevelFilter {
    parse_level(option_env!("SUPATODO_LOG"))
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
