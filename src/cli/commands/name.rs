//! cli::commands::name
//!
//! Expose the path/name transforms on the command line.

use anyhow::{Context as _, Result};

use crate::core::repo_name;

/// Handle `bzlmirror encode <module-path>`.
pub fn encode(module_path: &str) -> Result<()> {
    println!("{}", repo_name::module_path_to_repo_name(module_path));
    Ok(())
}

/// Handle `bzlmirror decode <repo-name>`.
pub fn decode(name: &str) -> Result<()> {
    let module_path = repo_name::repo_name_to_module_path(name)
        .with_context(|| format!("cannot decode {name:?}"))?;
    println!("{module_path}");
    Ok(())
}

/// Handle `bzlmirror repo-name <import-path>`.
pub fn repo_name(import_path: &str) -> Result<()> {
    println!("{}", repo_name::import_path_to_repo_name(import_path));
    Ok(())
}
