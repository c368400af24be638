//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--registry <path>`: Registry root directory
//! - `--proxy <url>`: Module proxy base URL
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bzlmirror - Mirror Go modules into a Bazel module registry
#[derive(Parser, Debug)]
#[command(name = "bzlmirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Registry root directory (overrides config file)
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,

    /// Module proxy base URL (overrides config file and BZLMIRROR_PROXY)
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mirror one module version into the registry
    #[command(long_about = "Mirror one module version into the registry.\n\n\
        Downloads the module archive from the proxy, computes its integrity \
        hash, writes the version's source.json, and refreshes the module's \
        metadata.json from the proxy's version list.")]
    Add {
        /// Module path, e.g. golang.org/x/mod
        module_path: String,

        /// Version to mirror, e.g. v0.19.0
        version: String,
    },

    /// List the versions the module proxy knows about
    Versions {
        /// Module path, e.g. golang.org/x/mod
        module_path: String,
    },

    /// Encode a module path as a reversible repository name
    #[command(long_about = "Encode a module path as a reversible repository name.\n\n\
        The encoding is bijective: `bzlmirror decode` recovers the module \
        path byte-for-byte. The result is a valid Bazel module name.")]
    Encode {
        /// Module path, e.g. gopkg.in/yaml.v3
        module_path: String,
    },

    /// Decode a repository name back to its module path
    Decode {
        /// Repository name produced by `bzlmirror encode`
        repo_name: String,
    },

    /// Derive the conventional (lossy) repository name for an import path
    #[command(name = "repo-name")]
    RepoName {
        /// Import path, e.g. golang.org/x/mod
        import_path: String,
    },

    /// Parse a label and print its canonical form
    Label {
        /// Label string, e.g. @repo//pkg:target
        label: String,
    },
}
