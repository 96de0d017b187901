//! Lox front end.
//!
//! Library half of the `lox` binary: command implementations, error
//! reporting, and process-level policy (exit codes, logging). The actual
//! scanning lives in `lox_lexer`; this crate decides what to do with the
//! result.
//!
//! # Architecture
//!
//! ```text
//!   source file / prompt line
//!             │
//!             ▼
//!      lox_lexer::scan ──────► tokens + errors
//!             │
//!             ▼
//!   commands::{run, tokenize, repl}
//!             │
//!             ▼
//!   stdout / stderr, exit code (0, 64, 65, 74)
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod reporting;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber for debug output.
///
/// Does nothing unless `RUST_LOG` is set, so normal CLI output stays
/// clean. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
