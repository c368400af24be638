//! registry::traits
//!
//! The module proxy abstraction and the registry error taxonomy.
//!
//! # Design
//!
//! Commands and the sync orchestration talk to a [`ModuleProxy`] trait
//! object rather than a concrete HTTP client, so tests can substitute
//! implementations without network access. The production implementation
//! is [`GoProxy`].
//!
//! [`GoProxy`]: crate::registry::goproxy::GoProxy

use async_trait::async_trait;
use thiserror::Error;

/// Errors from module proxy and registry store operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The proxy does not know the requested module (404/410).
    #[error("module not found: {0}")]
    NotFound(String),

    /// The proxy answered with an unexpected status.
    #[error("module proxy returned status {status} for {url}")]
    Http { status: u16, url: String },

    /// Transport-level failure talking to the proxy.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Filesystem failure while writing the registry.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A descriptor could not be serialized or parsed.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] serde_json::Error),
}

/// A Go module proxy.
///
/// Implementations speak the module proxy protocol: version lists are one
/// version per line, archives are zip files. Version strings are used
/// verbatim (the proxy's `v`-prefixed form).
#[async_trait]
pub trait ModuleProxy: Send + Sync {
    /// List every version the proxy knows for `module_path`.
    async fn list_versions(&self, module_path: &str) -> Result<Vec<String>, RegistryError>;

    /// Download the zip archive for `module_path` at `version`.
    async fn download_zip(
        &self,
        module_path: &str,
        version: &str,
    ) -> Result<Vec<u8>, RegistryError>;

    /// The URL the archive for `module_path` at `version` is served from.
    ///
    /// Recorded in the source descriptor so consumers fetch from the same
    /// place the integrity hash was computed against.
    fn zip_url(&self, module_path: &str, version: &str) -> String;
}
