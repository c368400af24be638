//! registry::sync
//!
//! Orchestration for mirroring one module version into the registry.
//!
//! The flow is: download the archive, hash it, write the version's
//! `source.json`, then refresh `metadata.json` with the proxy's full
//! version list merged into whatever the registry already knows.

use tracing::info;

use crate::core::repo_name::module_path_to_repo_name;

use super::integrity::integrity;
use super::schema::{ModuleMetadata, ModuleSource};
use super::store::RegistryStore;
use super::traits::{ModuleProxy, RegistryError};

/// Mirror `module_path` at `version` into the registry.
///
/// Returns the source descriptor that was written, so callers can report
/// the integrity hash.
///
/// # Errors
///
/// Surfaces proxy failures ([`RegistryError::NotFound`],
/// [`RegistryError::Http`], [`RegistryError::Network`]) and store
/// failures without retrying; all failures are deterministic functions of
/// the input and the proxy's responses.
pub async fn sync_module(
    proxy: &dyn ModuleProxy,
    store: &RegistryStore,
    module_path: &str,
    version: &str,
) -> Result<ModuleSource, RegistryError> {
    let module_name = module_path_to_repo_name(module_path);

    let archive = proxy.download_zip(module_path, version).await?;
    let mut source = ModuleSource::new(integrity(&archive), proxy.zip_url(module_path, version));
    source.strip_prefix = Some(format!("{module_path}@{version}"));
    store.write_source(&module_name, version, &source)?;

    refresh_metadata(proxy, store, module_path, &module_name, version).await?;

    info!(
        module = module_path,
        version,
        name = %module_name,
        "mirrored module"
    );
    Ok(source)
}

/// Rewrite a module's `metadata.json` from the proxy's version list.
///
/// Versions already recorded in the registry are kept in their original
/// order; `synced_version` is included even if the proxy's list omits it
/// (proxies may lag behind explicitly requested versions).
async fn refresh_metadata(
    proxy: &dyn ModuleProxy,
    store: &RegistryStore,
    module_path: &str,
    module_name: &str,
    synced_version: &str,
) -> Result<(), RegistryError> {
    let mut metadata = store
        .read_metadata(module_name)?
        .unwrap_or_else(|| ModuleMetadata::new(module_path));
    metadata.merge_versions(proxy.list_versions(module_path).await?);
    metadata.merge_versions([synced_version]);
    store.write_metadata(module_name, &metadata)
}
