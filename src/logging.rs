//! Tracing setup
//!
//! Logs go to stderr so command output on stdout stays clean. The filter is
//! read from `EXPENSE_LEDGER_LOG`, then `RUST_LOG`, defaulting to warnings.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "EXPENSE_LEDGER_LOG";

const DEFAULT_FILTER: &str = "expense_ledger=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber once per process
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
