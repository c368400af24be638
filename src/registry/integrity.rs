//! registry::integrity
//!
//! Subresource-integrity style content hashes for module archives.
//!
//! Registries record archive hashes as `"sha256-" + base64(sha256(bytes))`
//! so consumers can verify a download before unpacking it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Compute the integrity string for an archive's bytes.
///
/// # Example
///
/// ```
/// use bzlmirror::registry::integrity::integrity;
///
/// assert_eq!(
///     integrity(b""),
///     "sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
/// );
/// ```
pub fn integrity(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("sha256-{}", STANDARD.encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(
            integrity(b""),
            "sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
        assert_eq!(
            integrity(b"hello world"),
            "sha256-uU0nuZNNPgilLlLX2n2r+sSE7+N6U4DukIj3rOLvzek="
        );
    }

    #[test]
    fn deterministic() {
        let bytes = b"module archive bytes";
        assert_eq!(integrity(bytes), integrity(bytes));
    }
}
