//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into [`crate::core`] or [`crate::registry`]
//! 3. Formats and displays output
//!
//! # Async Commands
//!
//! Proxy-backed commands (add, versions) are async because they involve
//! network I/O; their handlers build a tokio runtime and `block_on` so the
//! dispatch layer stays synchronous.

mod add;
mod label_cmd;
mod name;
mod versions;

pub use add::add;
pub use label_cmd::label;
pub use name::{decode, encode, repo_name};
pub use versions::versions;

use anyhow::Result;

use crate::cli::args::Command;
use crate::config::Config;

/// Shared state every command handler receives.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration after flag/env/file resolution.
    pub config: Config,

    /// Suppress informational output.
    pub quiet: bool,
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Add {
            module_path,
            version,
        } => add(ctx, &module_path, &version),
        Command::Versions { module_path } => versions(ctx, &module_path),
        Command::Encode { module_path } => encode(&module_path),
        Command::Decode { repo_name } => decode(&repo_name),
        Command::RepoName { import_path } => repo_name(&import_path),
        Command::Label { label: input } => label(&input),
    }
}
