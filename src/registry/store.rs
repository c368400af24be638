//! registry::store
//!
//! Registry directory layout and descriptor persistence.
//!
//! # Layout
//!
//! All descriptors live under `<root>/modules/`, keyed by the module's
//! reversibly encoded repository name so the module path can always be
//! recovered from the directory name alone:
//!
//! ```text
//! <root>/modules/<encoded-name>/metadata.json
//! <root>/modules/<encoded-name>/<version>/source.json
//! ```
//!
//! No code outside this module should compute registry paths.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::schema::{ModuleMetadata, ModuleSource};
use super::traits::RegistryError;

/// Descriptor store rooted at a registry directory.
///
/// # Example
///
/// ```
/// use bzlmirror::registry::store::RegistryStore;
/// use std::path::PathBuf;
///
/// let store = RegistryStore::new("/srv/registry");
/// assert_eq!(
///     store.metadata_path("gopkg.in_yaml.v3"),
///     PathBuf::from("/srv/registry/modules/gopkg.in_yaml.v3/metadata.json")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStore {
    root: PathBuf,
}

impl RegistryStore {
    /// Create a store rooted at `root`. Nothing is created on disk until
    /// the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The registry root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every mirrored module.
    pub fn modules_dir(&self) -> PathBuf {
        self.root.join("modules")
    }

    /// Directory for one module, keyed by its encoded repository name.
    pub fn module_dir(&self, module_name: &str) -> PathBuf {
        self.modules_dir().join(module_name)
    }

    /// Path of a module's `metadata.json`.
    pub fn metadata_path(&self, module_name: &str) -> PathBuf {
        self.module_dir(module_name).join("metadata.json")
    }

    /// Path of the `source.json` for one version of a module.
    pub fn source_path(&self, module_name: &str, version: &str) -> PathBuf {
        self.module_dir(module_name).join(version).join("source.json")
    }

    /// Read a module's metadata, or `None` if it has never been written.
    pub fn read_metadata(
        &self,
        module_name: &str,
    ) -> Result<Option<ModuleMetadata>, RegistryError> {
        let path = self.metadata_path(module_name);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Write a module's metadata, replacing any existing descriptor.
    pub fn write_metadata(
        &self,
        module_name: &str,
        metadata: &ModuleMetadata,
    ) -> Result<(), RegistryError> {
        self.write_json(&self.metadata_path(module_name), metadata)
    }

    /// Write the source descriptor for one version of a module.
    pub fn write_source(
        &self,
        module_name: &str,
        version: &str,
        source: &ModuleSource,
    ) -> Result<(), RegistryError> {
        self.write_json(&self.source_path(module_name, version), source)
    }

    fn write_json<T: serde::Serialize>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<(), RegistryError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut contents = serde_json::to_string_pretty(value)?;
        contents.push('\n');
        debug!(path = %path.display(), "writing descriptor");
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_layout() {
        let store = RegistryStore::new("/registry");
        assert_eq!(store.modules_dir(), PathBuf::from("/registry/modules"));
        assert_eq!(
            store.module_dir("golang.org_x_mod"),
            PathBuf::from("/registry/modules/golang.org_x_mod")
        );
        assert_eq!(
            store.metadata_path("golang.org_x_mod"),
            PathBuf::from("/registry/modules/golang.org_x_mod/metadata.json")
        );
        assert_eq!(
            store.source_path("golang.org_x_mod", "v0.19.0"),
            PathBuf::from("/registry/modules/golang.org_x_mod/v0.19.0/source.json")
        );
    }

    #[test]
    fn read_missing_metadata_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path());
        assert_eq!(store.read_metadata("golang.org_x_mod").unwrap(), None);
    }

    #[test]
    fn metadata_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path());

        let mut meta = ModuleMetadata::new("golang.org/x/mod");
        meta.merge_versions(["v0.19.0"]);
        store.write_metadata("golang.org_x_mod", &meta).unwrap();

        let back = store.read_metadata("golang.org_x_mod").unwrap();
        assert_eq!(back, Some(meta));
    }

    #[test]
    fn descriptors_end_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path());

        let source = ModuleSource::new("sha256-abc", "https://example.com/m.zip");
        store
            .write_source("example.com_m", "v1.0.0", &source)
            .unwrap();

        let contents =
            fs::read_to_string(store.source_path("example.com_m", "v1.0.0")).unwrap();
        assert!(contents.ends_with('\n'));
        let back: ModuleSource = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, source);
    }
}
