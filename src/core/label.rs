//! core::label
//!
//! Parsing and manipulation of Bazel labels.
//!
//! A label identifies a build target as `@repo//pkg:name`. Every part is
//! optional in the textual form, subject to the grammar below, but a parsed
//! [`Label`] always carries a non-empty target name.
//!
//! # Grammar
//!
//! ```text
//! label = ["@" repo] ["//" pkg] [":" name]
//! ```
//!
//! Two contractions are part of the grammar and preserved exactly:
//!
//! - `//x` is equivalent to `//x:x` (name defaults to the last package
//!   segment, and the redundant `:name` is omitted when rendering).
//! - A bare `@foo` means the default target of repository `foo`, i.e.
//!   `@foo//:foo`.
//!
//! A repository of exactly `"@"` is distinct from the empty repository: it
//! names the main repository explicitly and renders as `@//pkg:name`.
//!
//! # Example
//!
//! ```
//! use bzlmirror::core::label::Label;
//!
//! let label = Label::parse("@my_repo//some/pkg:target").unwrap();
//! assert_eq!(label.repo, "my_repo");
//! assert_eq!(label.pkg, "some/pkg");
//! assert_eq!(label.name, "target");
//! assert!(!label.relative);
//!
//! // Canonical rendering drops a name equal to the last package segment.
//! let label = Label::parse("//foo/bar:bar").unwrap();
//! assert_eq!(label.to_string(), "//foo/bar");
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Repository names: exactly `@`, or a letter/dot/dash followed by
/// letters, digits, `_.-`.
static REPO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@$|^[A-Za-z.-][A-Za-z0-9_.-]*$").expect("repo pattern"));

/// Package names: letters, digits, `/._@-`.
static PKG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9/._@-]*$").expect("pkg pattern"));

/// Target names: the broad printable set Bazel permits, excluding the
/// structurally significant characters.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"^[A-Za-z0-9!%-@^_` "#$&'()*-+,;<=>?\[\]{|}~/.]*$"##).expect("name pattern")
});

/// Errors from label parsing.
///
/// Malformed input is always a caller/user error; it is surfaced
/// immediately and never partially accepted. The offending input string is
/// attached to every variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("label parse error: repository has invalid characters: {0:?}")]
    InvalidRepo(String),

    #[error("label parse error: package has invalid characters: {0:?}")]
    InvalidPackage(String),

    #[error("label parse error: name has invalid characters: {0:?}")]
    InvalidName(String),

    #[error("label parse error: empty name: {0:?}")]
    EmptyName(String),

    #[error("label parse error: empty package and name: {0:?}")]
    EmptyPackageAndName(String),
}

/// A label for a build target: repository, package, and target name.
///
/// Labels are immutable once built; [`abs`] and [`rel`] return new values.
/// Equality is exact field equality and does not resolve contractions:
/// `//pkg:pkg` parses to the same struct as `//pkg` (normalization happens
/// at parse time), but a hand-built `Label` with a different `name` is a
/// different value.
///
/// Labels serialize as their canonical string form.
///
/// [`abs`]: Label::abs
/// [`rel`]: Label::rel
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label {
    /// Repository name. Empty if the label refers to the current
    /// repository; exactly `"@"` if the main repository is referenced
    /// explicitly.
    pub repo: String,

    /// Package name, a slash-separated path. May be empty.
    pub pkg: String,

    /// Target name. Never empty in a parsed label. The name may be omitted
    /// from a label string when it equals the last component of the
    /// package (`//x` is `//x:x`), but it is always set here.
    pub name: String,

    /// Whether the label refers to a target in the current package.
    /// True if and only if both `repo` and `pkg` were omitted from the
    /// textual form.
    pub relative: bool,
}

impl Label {
    /// Construct an absolute label from components.
    pub fn new(
        repo: impl Into<String>,
        pkg: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            pkg: pkg.into(),
            name: name.into(),
            relative: false,
        }
    }

    /// Parse a label from its textual form.
    ///
    /// # Errors
    ///
    /// Returns a [`LabelError`] naming the offending part (repository,
    /// package, or name characters; empty name; empty package and name).
    ///
    /// # Example
    ///
    /// ```
    /// use bzlmirror::core::label::Label;
    ///
    /// let label = Label::parse("//a/b").unwrap();
    /// assert_eq!(label.pkg, "a/b");
    /// assert_eq!(label.name, "b");
    ///
    /// assert!(Label::parse(":").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, LabelError> {
        let orig = s;
        let mut rest = s.to_string();

        let mut relative = true;
        let mut repo = String::new();
        if rest.starts_with('@') {
            relative = false;
            match rest.find("//") {
                Some(end) if end > 1 => {
                    repo = rest[1..end].to_string();
                    rest = rest[end..].to_string();
                }
                Some(_) => {
                    // "@//..." keeps repo = "@", distinct from "//..."
                    // where repo = "".
                    repo = "@".to_string();
                    rest = rest[1..].to_string();
                }
                None => {
                    // A bare "@foo" means the default target of
                    // repository foo: "@foo//:foo".
                    repo = rest[1..].to_string();
                    rest = format!("//:{repo}");
                }
            }
            if !REPO_PATTERN.is_match(&repo) {
                return Err(LabelError::InvalidRepo(orig.to_string()));
            }
        }

        let mut pkg = String::new();
        if rest.starts_with("//") {
            relative = false;
            match rest.find(':') {
                None => {
                    pkg = rest[2..].to_string();
                    rest = String::new();
                }
                Some(end) => {
                    pkg = rest[2..end].to_string();
                    rest = rest[end..].to_string();
                }
            }
            if !PKG_PATTERN.is_match(&pkg) {
                return Err(LabelError::InvalidPackage(orig.to_string()));
            }
        }

        if rest == ":" {
            return Err(LabelError::EmptyName(orig.to_string()));
        }
        let mut name = rest.strip_prefix(':').unwrap_or(rest.as_str()).to_string();
        if !NAME_PATTERN.is_match(&name) {
            return Err(LabelError::InvalidName(orig.to_string()));
        }

        if pkg.is_empty() && name.is_empty() {
            return Err(LabelError::EmptyPackageAndName(orig.to_string()));
        }
        if name.is_empty() {
            name = path_base(&pkg).to_string();
        }

        Ok(Self {
            repo,
            pkg,
            name,
            relative,
        })
    }

    /// Compute an absolute label (one with a repository and package) from
    /// this label. An already-absolute label is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bzlmirror::core::label::Label;
    ///
    /// let rel = Label::parse(":target").unwrap();
    /// let abs = rel.abs("my_repo", "some/pkg");
    /// assert_eq!(abs.to_string(), "@my_repo//some/pkg:target");
    /// ```
    pub fn abs(&self, repo: &str, pkg: &str) -> Self {
        if !self.relative {
            return self.clone();
        }
        Self::new(repo, pkg, self.name.clone())
    }

    /// Attempt to compute a relative label from this label.
    ///
    /// A label that is already relative, or that lives in a different
    /// repository, is returned unchanged. A label in the same repository
    /// but a different package keeps its package and drops the repository.
    pub fn rel(&self, repo: &str, pkg: &str) -> Self {
        if self.relative || self.repo != repo {
            return self.clone();
        }
        if self.pkg == pkg {
            return Self {
                name: self.name.clone(),
                relative: true,
                ..Self::default()
            };
        }
        Self::new("", self.pkg.clone(), self.name.clone())
    }

    /// Whether `other` is contained by the package of this label or a
    /// sub-package of it.
    ///
    /// Containment is slash-delimited: `//foo` contains `//foo/bar` but
    /// not `//foobar`.
    ///
    /// # Panics
    ///
    /// Neither label may be relative; passing one is a precondition
    /// violation by the caller.
    pub fn contains(&self, other: &Label) -> bool {
        assert!(!self.relative, "label must not be relative: {self}");
        assert!(!other.relative, "label must not be relative: {other}");
        self.repo == other.repo && path_has_prefix(&other.pkg, &self.pkg)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            return write!(f, ":{}", self.name);
        }

        // repo == "" renders as "//..."; repo == "@" as "@//...".
        if !self.repo.is_empty() && self.repo != "@" {
            write!(f, "@{}", self.repo)?;
        } else {
            write!(f, "{}", self.repo)?;
        }

        if path_base(&self.pkg) == self.name {
            write!(f, "//{}", self.pkg)
        } else {
            write!(f, "//{}:{}", self.pkg, self.name)
        }
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Label {
    type Error = LabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.to_string()
    }
}

/// Last element of a slash-separated path, after trailing slashes are
/// removed. Returns `"."` for an empty path and `"/"` for a path of only
/// slashes.
fn path_base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Whether `prefix` names the package `path` or a slash-delimited ancestor
/// of it. The empty prefix contains everything.
fn path_has_prefix(path: &str, prefix: &str) -> bool {
    prefix.is_empty()
        || path == prefix
        || (path.len() > prefix.len()
            && path.starts_with(prefix)
            && path.as_bytes()[prefix.len()] == b'/')
}
