//! registry::goproxy
//!
//! HTTP client for the Go module proxy protocol.
//!
//! # Protocol
//!
//! Only the two endpoints bzlmirror needs are implemented:
//!
//! - `GET {base}/{module}/@v/list` - known versions, one per line
//! - `GET {base}/{module}/@v/{version}.zip` - the module archive
//!
//! 404 and 410 both mean "not found" in the proxy protocol (410 is served
//! by proxies that cache negative lookups).

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use super::traits::{ModuleProxy, RegistryError};

/// The default public Go module proxy.
pub const DEFAULT_PROXY: &str = "https://proxy.golang.org";

/// Module proxy client backed by reqwest.
///
/// # Example
///
/// ```no_run
/// use bzlmirror::registry::goproxy::{GoProxy, DEFAULT_PROXY};
/// use bzlmirror::registry::ModuleProxy;
///
/// # async fn demo() -> Result<(), bzlmirror::registry::RegistryError> {
/// let proxy = GoProxy::new(DEFAULT_PROXY);
/// let versions = proxy.list_versions("golang.org/x/mod").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GoProxy {
    client: Client,
    base: String,
}

impl GoProxy {
    /// Create a client for the proxy at `base` (no trailing slash needed).
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base,
        }
    }

    fn versions_url(&self, module_path: &str) -> String {
        format!("{}/{}/@v/list", self.base, module_path)
    }

    async fn get(&self, url: &str, module_path: &str) -> Result<Response, RegistryError> {
        let resp = self.client.get(url).send().await?;
        match resp.status() {
            status if status.is_success() => Ok(resp),
            StatusCode::NOT_FOUND | StatusCode::GONE => {
                Err(RegistryError::NotFound(module_path.to_string()))
            }
            status => Err(RegistryError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}

#[async_trait]
impl ModuleProxy for GoProxy {
    async fn list_versions(&self, module_path: &str) -> Result<Vec<String>, RegistryError> {
        let url = self.versions_url(module_path);
        debug!(%url, "listing module versions");
        let body = self.get(&url, module_path).await?.text().await?;
        Ok(body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    async fn download_zip(
        &self,
        module_path: &str,
        version: &str,
    ) -> Result<Vec<u8>, RegistryError> {
        let url = self.zip_url(module_path, version);
        debug!(%url, "downloading module archive");
        let bytes = self.get(&url, module_path).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn zip_url(&self, module_path: &str, version: &str) -> String {
        format!("{}/{}/@v/{}.zip", self.base, module_path, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_proxy_protocol() {
        let proxy = GoProxy::new("https://example.com/proxy/");
        assert_eq!(
            proxy.versions_url("golang.org/x/mod"),
            "https://example.com/proxy/golang.org/x/mod/@v/list"
        );
        assert_eq!(
            proxy.zip_url("golang.org/x/mod", "v0.19.0"),
            "https://example.com/proxy/golang.org/x/mod/@v/v0.19.0.zip"
        );
    }
}
