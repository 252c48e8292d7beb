//! Command line front end for the registration compiler.
//!
//! The binary in `main.rs` only parses arguments and maps results to an exit
//! status; everything it calls lives here so it can be tested without
//! spawning a process.

pub mod commands;
mod error;
mod options;

pub use error::CliError;
pub use options::{parse_args, CliOptions, Command, Invocation, OutputFormat};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, so normal runs stay quiet.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
