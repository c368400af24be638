//! cli
//!
//! Command-line interface layer for bzlmirror.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize logging and load configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that call into [`crate::core`] and [`crate::registry`].

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::Context;

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let mut config = Config::load(Path::new("."))?;
    config.apply_overrides(cli.registry.clone(), cli.proxy.clone());

    let ctx = Context {
        config,
        quiet: cli.quiet,
    };
    commands::dispatch(cli.command, &ctx)
}

/// Initialize the tracing subscriber once, before any command runs.
///
/// `--debug` forces debug-level output; otherwise `RUST_LOG` is honored
/// with an `info` default.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
