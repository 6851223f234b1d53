//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Filter directive used when `INFLUENCE_LOG` is unset or invalid.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!("influence={}", config.effective_log_level())
}

/// Initialize logging.
///
/// Reads `INFLUENCE_LOG` for per-target levels, e.g.
/// `INFLUENCE_LOG=influence_cascade=debug,influence_core=warn`.
/// Falls back to `influence=<log_level>` from the config.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
