use rolegate_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

use crate::RuntimeConfig;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter when set.
pub fn init_tracing(config: &RuntimeConfig) -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter.as_str()))
        .map_err(|error| {
            AppError::Validation(format!(
                "invalid log filter '{}': {error}",
                config.log_filter
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|error| {
            AppError::Internal(format!("failed to install tracing subscriber: {error}"))
        })
}

#[cfg(test)]
mod tests {
    use rolegate_core::AppError;

    use crate::RuntimeConfig;

    use super::init_tracing;

    #[test]
    fn second_install_is_reported() {
        let config = RuntimeConfig::default();
        let _ = init_tracing(&config);

        assert!(matches!(init_tracing(&config), Err(AppError::Internal(_))));
    }
}
