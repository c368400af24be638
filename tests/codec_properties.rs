//! Property-based tests for the core domain logic.
//!
//! These tests use proptest to verify the label grammar and the
//! path/name codec invariants hold across randomly generated inputs.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

use bzlmirror::core::label::Label;
use bzlmirror::core::repo_name::{
    import_path_to_repo_name, module_path_to_repo_name, repo_name_to_module_path,
};

/// The alphabet every encoded repository name must stay within.
static REPO_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_.-]*[a-z0-9]$").unwrap());

/// Check the module-path validity rules the codec's invertibility rests
/// on: non-empty slash-separated elements that never begin or end with a
/// dot, a domain-like leading element (lowercase letters, digits, dots,
/// dashes, containing at least one dot and not starting with a dash; in
/// particular no tilde, so no path can masquerade as the `a~C.a` leading
/// escape), and a final element whose prefix before the first dot is not
/// the reserved name `con`.
fn is_valid_module_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let elements: Vec<&str> = path.split('/').collect();
    for element in &elements {
        if element.is_empty() || element.starts_with('.') || element.ends_with('.') {
            return false;
        }
    }
    let first = elements[0];
    if first.starts_with('-')
        || !first.contains('.')
        || !first
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
    {
        return false;
    }
    let last = elements[elements.len() - 1];
    let last_prefix = last.split('.').next().unwrap_or(last);
    !last_prefix.eq_ignore_ascii_case("con")
}

/// Strategy for the domain-like leading element: two dot-separated labels,
/// so the at-least-one-dot rule holds by construction.
fn leading_path_element() -> impl Strategy<Value = String> {
    r"[a-z0-9][a-z0-9-]{0,4}\.[a-z0-9][a-z0-9-]{0,4}".prop_map(|s| s)
}

/// Strategy for later path elements; these may use the full escaped
/// alphabet but satisfy the no-leading/trailing-dot rule by construction.
fn module_path_element() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_~-]([A-Za-z0-9_~.-]{0,8}[A-Za-z0-9_~-])?".prop_map(|s| s)
}

/// Strategy for valid module paths.
fn module_path() -> impl Strategy<Value = String> {
    (
        leading_path_element(),
        prop::collection::vec(module_path_element(), 0..4),
    )
        .prop_map(|(first, rest)| {
            let mut elements = vec![first];
            elements.extend(rest);
            elements.join("/")
        })
        .prop_filter("must satisfy module path rules", |p| {
            is_valid_module_path(p)
        })
}

proptest! {
    /// The bijection: decoding an encoded module path recovers it
    /// byte-for-byte.
    #[test]
    fn codec_round_trip(path in module_path()) {
        let repo_name = module_path_to_repo_name(&path);
        let decoded = repo_name_to_module_path(&repo_name);
        prop_assert_eq!(
            decoded.as_deref(),
            Ok(path.as_str()),
            "repo name was {}", repo_name
        );
    }

    /// Every encoded name is a valid Bazel module name.
    #[test]
    fn encoded_names_match_the_restricted_alphabet(path in module_path()) {
        let repo_name = module_path_to_repo_name(&path);
        prop_assert!(
            REPO_NAME_PATTERN.is_match(&repo_name),
            "encode({:?}) = {:?} escapes the repo name alphabet",
            path, repo_name
        );
    }

    /// The lossy naming never emits anything outside lowercase word
    /// characters.
    #[test]
    fn lossy_names_are_flat_identifiers(path in module_path()) {
        let name = import_path_to_repo_name(&path);
        prop_assert!(
            name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "import_path_to_repo_name({:?}) = {:?}",
            path, name
        );
    }
}

// =============================================================================
// Label grammar properties
// =============================================================================

/// Strategy for label strings covering every grammar shape: fully
/// qualified, package-only, contracted, relative, and bare-repository.
fn label_string() -> impl Strategy<Value = String> {
    let repo = "[a-z][a-z0-9_.-]{0,8}";
    let pkg = "[a-z0-9_@.-]{1,6}(/[a-z0-9_@.-]{1,6}){0,3}";
    let name = "[a-z0-9_.+-]{1,8}";
    prop_oneof![
        (repo, pkg, name).prop_map(|(r, p, n)| format!("@{r}//{p}:{n}")),
        (pkg, name).prop_map(|(p, n)| format!("//{p}:{n}")),
        pkg.prop_map(|p| format!("//{p}")),
        name.prop_map(|n| format!(":{n}")),
        repo.prop_map(|r| format!("@{r}")),
    ]
}

proptest! {
    /// Canonical forms are fixed points: rendering a parsed label and
    /// reparsing it yields an equal label.
    #[test]
    fn parse_render_stability(s in label_string()) {
        let parsed = Label::parse(&s).unwrap();
        let rendered = parsed.to_string();
        let reparsed = Label::parse(&rendered).unwrap();
        prop_assert_eq!(parsed, reparsed, "rendered form was {}", rendered);
    }

    /// A parsed label never has an empty name.
    #[test]
    fn parsed_names_are_never_empty(s in label_string()) {
        let parsed = Label::parse(&s).unwrap();
        prop_assert!(!parsed.name.is_empty());
    }

    /// Relative implies empty repository and package.
    #[test]
    fn relative_labels_have_no_repo_or_pkg(s in label_string()) {
        let parsed = Label::parse(&s).unwrap();
        if parsed.relative {
            prop_assert!(parsed.repo.is_empty());
            prop_assert!(parsed.pkg.is_empty());
        }
    }

    /// `abs` is the identity on labels that are already absolute.
    #[test]
    fn abs_is_idempotent(
        s in label_string(),
        repo in "[a-z]{1,6}",
        pkg in "[a-z]{1,6}",
    ) {
        let parsed = Label::parse(&s).unwrap();
        if !parsed.relative {
            prop_assert_eq!(parsed.abs(&repo, &pkg), parsed);
        }
    }

    /// `rel` then `abs` against the same coordinates restores the package
    /// and name.
    #[test]
    fn rel_abs_preserves_target(
        pkg in "[a-z]{1,6}",
        name in "[a-z]{1,6}",
    ) {
        let l = Label::new("repo", pkg.clone(), name.clone());
        let restored = l.rel("repo", &pkg).abs("repo", &pkg);
        prop_assert_eq!(restored.pkg, pkg);
        prop_assert_eq!(restored.name, name);
    }

    /// Containment is slash-delimited, not plain string-prefix.
    #[test]
    fn containment_is_path_aware(
        pkg in "[a-z]{1,6}",
        sub in "[a-z]{1,6}",
    ) {
        let parent = Label::new("", pkg.clone(), "t");
        let child = Label::new("", format!("{pkg}/{sub}"), "t");
        let sibling = Label::new("", format!("{pkg}{sub}"), "t");

        prop_assert!(parent.contains(&parent));
        prop_assert!(parent.contains(&child));
        prop_assert!(!parent.contains(&sibling));
    }

    /// Labels round-trip through serde via their canonical string form.
    #[test]
    fn label_serde_round_trip(s in label_string()) {
        let label = Label::parse(&s).unwrap();
        let json = serde_json::to_string(&label).unwrap();
        let back: Label = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, label);
    }
}

// =============================================================================
// Deterministic edge cases the strategies cannot be trusted to hit
// =============================================================================

#[test]
fn round_trip_of_escape_heavy_paths() {
    for path in [
        "example.org/~/~_/_/_~/__/_._/_.__._.__/foobar",
        "1example.org/foo/foo_bar-",
        ".example.org/foo/foo_bar_",
        "Upper.example.org/X",
    ] {
        let repo_name = module_path_to_repo_name(path);
        assert!(REPO_NAME_PATTERN.is_match(&repo_name), "{repo_name:?}");
        assert_eq!(repo_name_to_module_path(&repo_name).as_deref(), Ok(path));
    }
}

#[test]
fn validity_filter_requires_a_dotted_leading_element() {
    // A leading element with no dot (like "a") can encode to a name
    // shorter than the two characters a valid module name needs.
    assert!(!is_valid_module_path("a"));
    assert!(!is_valid_module_path("localhost/pkg"));
    assert!(is_valid_module_path("example.com"));
}

#[test]
fn validity_filter_rejects_the_documented_collisions() {
    assert!(!is_valid_module_path("example.com/con"));
    assert!(!is_valid_module_path("example.com/CON.tar"));
    assert!(!is_valid_module_path("a~1.a/foo"));
    assert!(!is_valid_module_path("a~b.ab/foo"));
    assert!(!is_valid_module_path("example.com/.hidden"));
    assert!(!is_valid_module_path("example.com/trailing."));
    assert!(is_valid_module_path("gopkg.in/yaml.v3"));
}
