//! Arlang interpreter CLI library.
//!
//! The binary (`arl`) is a thin front end over `arl_eval`: it reads a
//! script file and hands it to the interpreter. All language behavior
//! lives in `arl_eval`.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the CLI.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=arl_eval=debug` or `RUST_LOG=arl_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
