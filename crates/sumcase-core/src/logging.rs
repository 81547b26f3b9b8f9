// Purpose: Tracing subscriber setup for applications and tests using sumcase

use std::sync::Once;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LoggingConfig;

//-----------------------------------------------------------------------------
// Tracing Initialization
//-----------------------------------------------------------------------------

/// Installs a global tracing subscriber configured by `config`.
///
/// `RUST_LOG` overrides `config.level` when set. Fails if the filter
/// directive is malformed or a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    install(config, false)
}

static INIT: Once = Once::new();

/// Initialize test logging at debug level (called once per test binary).
/// Output goes through the test harness so it is captured per test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: "debug".to_string(),
            json: false,
        };
        let _ = install(&config, true);
    });
}

fn install(config: &LoggingConfig, test_writer: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let subscriber = Registry::default().with(env_filter);

    if config.json {
        let json_layer = fmt::layer().json().with_target(true).with_level(true);
        if test_writer {
            tracing::subscriber::set_global_default(
                subscriber.with(json_layer.with_test_writer()),
            )?;
        } else {
            tracing::subscriber::set_global_default(subscriber.with(json_layer))?;
        }
    } else {
        let fmt_layer = fmt::layer().pretty().with_target(true).with_level(true);
        if test_writer {
            tracing::subscriber::set_global_default(
                subscriber.with(fmt_layer.with_test_writer()),
            )?;
        } else {
            tracing::subscriber::set_global_default(subscriber.with(fmt_layer))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
        tracing::debug!("test logging initialized");
    }

    #[test]
    fn test_second_global_subscriber_is_rejected() {
        init_test_logging();
        assert!(init_tracing(&LoggingConfig::default()).is_err());
    }
}
