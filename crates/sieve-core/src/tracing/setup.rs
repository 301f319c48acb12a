//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the sieve tracing/logging system.
///
/// Reads the `SIEVE_LOG` environment variable for per-target log levels.
/// Format: `SIEVE_LOG=sieve_optimizer=debug,sieve_core=warn`
///
/// Falls back to `sieve=info` if `SIEVE_LOG` is not set or is invalid.
/// Idempotent. If the host already installed a global subscriber, this
/// leaves it in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SIEVE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("sieve=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
