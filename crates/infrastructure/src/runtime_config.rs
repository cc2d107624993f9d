use std::env;
use std::path::PathBuf;

use rolegate_core::{AppError, AppResult};

/// Runtime settings for the role services composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Optional JSON seed for the in-memory adapters.
    pub seed_path: Option<PathBuf>,
    /// Whether role updates are written to the change log.
    pub audit_enabled: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_owned(),
            seed_path: None,
            audit_enabled: true,
        }
    }
}

impl RuntimeConfig {
    /// Loads settings from the process environment, reading `.env` first.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(|name| env::var(name).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let log_filter = non_empty("ROLEGATE_LOG_FILTER").unwrap_or_else(|| "info".to_owned());
        let seed_path = non_empty("ROLEGATE_SEED_PATH").map(PathBuf::from);
        let audit_enabled = non_empty("ROLEGATE_AUDIT_ENABLED")
            .map(|value| parse_bool("ROLEGATE_AUDIT_ENABLED", value.as_str()))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            log_filter,
            seed_path,
            audit_enabled,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::Validation(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}
