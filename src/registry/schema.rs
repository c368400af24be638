//! registry::schema
//!
//! JSON descriptor schemas for the registry layout.
//!
//! Each mirrored module gets a `metadata.json` ([`ModuleMetadata`]) and one
//! `source.json` per version ([`ModuleSource`]). Field names follow the
//! registry's JSON conventions (`patch_strip`, `strip_prefix`); optional
//! fields are omitted when empty so descriptors stay minimal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Module-level descriptor: homepage and known versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    /// Homepage for the module, conventionally `https://<module path>`.
    pub homepage: String,

    /// Versions available in the registry, in the order they were first
    /// seen. Consumers rely on this being an ordered sequence.
    pub versions: Vec<String>,
}

impl ModuleMetadata {
    /// Fresh metadata for a module with no versions yet.
    pub fn new(module_path: &str) -> Self {
        Self {
            homepage: format!("https://{module_path}"),
            versions: Vec::new(),
        }
    }

    /// Merge newly observed versions into the list, preserving the
    /// existing order and skipping duplicates.
    pub fn merge_versions<I, S>(&mut self, versions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for version in versions {
            let version = version.into();
            if !self.versions.contains(&version) {
                self.versions.push(version);
            }
        }
    }
}

/// Per-version descriptor: where to fetch the archive and how to verify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSource {
    /// Content hash of the archive, `"sha256-" + base64(sha256(bytes))`.
    pub integrity: String,

    /// Strip depth for patches, omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_strip: Option<u32>,

    /// Patch file name to integrity hash, omitted when empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub patches: BTreeMap<String, String>,

    /// Directory prefix to strip from the archive, omitted when unset.
    /// Go module zips nest content under `<module path>@<version>/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_prefix: Option<String>,

    /// URL the archive is served from.
    pub url: String,
}

impl ModuleSource {
    /// A plain source descriptor with no patches.
    pub fn new(integrity: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            integrity: integrity.into(),
            patch_strip: None,
            patches: BTreeMap::new(),
            strip_prefix: None,
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_json_shape() {
        let mut meta = ModuleMetadata::new("golang.org/x/mod");
        meta.merge_versions(["v0.18.0", "v0.19.0"]);

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["homepage"], "https://golang.org/x/mod");
        assert_eq!(json["versions"][0], "v0.18.0");
        assert_eq!(json["versions"][1], "v0.19.0");
    }

    #[test]
    fn merge_preserves_order_and_deduplicates() {
        let mut meta = ModuleMetadata::new("example.com/m");
        meta.merge_versions(["v1.0.0", "v1.1.0"]);
        meta.merge_versions(["v1.1.0", "v1.2.0", "v1.0.0"]);
        assert_eq!(meta.versions, vec!["v1.0.0", "v1.1.0", "v1.2.0"]);
    }

    #[test]
    fn source_omits_empty_optional_fields() {
        let source = ModuleSource::new("sha256-abc", "https://example.com/m.zip");
        let json = serde_json::to_string(&source).unwrap();
        assert!(!json.contains("patch_strip"));
        assert!(!json.contains("patches"));
        assert!(!json.contains("strip_prefix"));
        assert!(json.contains("\"integrity\":\"sha256-abc\""));
        assert!(json.contains("\"url\":\"https://example.com/m.zip\""));
    }

    #[test]
    fn source_round_trips_with_patches() {
        let mut source = ModuleSource::new("sha256-abc", "https://example.com/m.zip");
        source.strip_prefix = Some("example.com/m@v1.0.0".to_string());
        source.patch_strip = Some(1);
        source
            .patches
            .insert("fix.patch".to_string(), "sha256-def".to_string());

        let json = serde_json::to_string(&source).unwrap();
        let back: ModuleSource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, source);
    }
}
