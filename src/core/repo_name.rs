//! core::repo_name
//!
//! Conversion between Go module paths and Bazel repository names.
//!
//! Two transforms live here:
//!
//! - [`import_path_to_repo_name`]: the conventional, human-friendly naming
//!   (domain reversal, `\W+` runs collapsed to `_`). Lossy and
//!   one-directional.
//! - [`module_path_to_repo_name`] / [`repo_name_to_module_path`]: a
//!   bijective escaping scheme. Every valid module path round-trips
//!   byte-for-byte, and every encoded name matches
//!   `^[a-z][a-z0-9_.-]*[a-z0-9]$` (a valid Bazel module name).
//!
//! # Escape scheme
//!
//! Bazel repository names may contain `A-Z a-z 0-9 _ - .`, but uppercase is
//! discouraged, and module names must start with a letter and end with a
//! letter or digit. Go module paths may contain `A-Z a-z 0-9 _ - . / ~`.
//! The scheme optimizes for the common characters `/` and `-` at the cost
//! of longer escapes for the uncommon ones:
//!
//! 1. A leading character that needs escaping or is a digit is replaced by
//!    `a~C.a` so the result starts with a lowercase letter.
//! 2. A trailing character that is neither a letter nor a digit gets the
//!    padding suffix `/con` appended.
//! 3. `_` becomes `._.`, `~` becomes `._-`, `A`-`Z` become `._a`-`._z`,
//!    and `/` becomes `_`.
//!
//! Reversibility rests on two restrictions on valid module paths: no path
//! element begins or ends with a dot (so `._` never occurs unescaped; any
//! literal `._` in the input is itself escaped to `.._.`), and no element
//! is a Windows-reserved file name (so no valid path ends in `/con`,
//! making it unambiguous padding).
//!
//! # Example
//!
//! ```
//! use bzlmirror::core::repo_name::{module_path_to_repo_name, repo_name_to_module_path};
//!
//! let name = module_path_to_repo_name("gopkg.in/yaml.v3");
//! assert_eq!(name, "gopkg.in_yaml.v3");
//! assert_eq!(repo_name_to_module_path(&name).unwrap(), "gopkg.in/yaml.v3");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximal runs of non-word characters, collapsed by the lossy naming.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("non-word pattern"));

/// The `a~C.a` escape a leading character is rewritten to.
static ESCAPED_LEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^a~(.)\.a").expect("leading escape pattern"));

/// Errors from decoding a repository name.
///
/// Either variant means the input was never produced by
/// [`module_path_to_repo_name`] (or was corrupted); it must be rejected,
/// not guessed at.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The escape marker `._` appeared with no character after it.
    #[error("invalid escape sequence '._' at end of repository name")]
    TruncatedEscape,

    /// The character after a `._` marker is not a recognized escape.
    #[error("invalid escape sequence '._{0}' in repository name")]
    InvalidEscape(char),
}

/// Convert a Go import path into a conventional Bazel repository name.
///
/// The input is lower-cased, the leading domain component is reversed
/// label by label, and every maximal run of non-word characters collapses
/// to a single underscore. This transform is lossy: use
/// [`module_path_to_repo_name`] when the module path must be recoverable.
///
/// # Example
///
/// ```
/// use bzlmirror::core::repo_name::import_path_to_repo_name;
///
/// assert_eq!(import_path_to_repo_name("golang.org/x/mod"), "org_golang_x_mod");
/// ```
pub fn import_path_to_repo_name(import_path: &str) -> String {
    let import_path = import_path.to_lowercase();
    let mut components = import_path.split('/');
    let domain = components.next().unwrap_or("");
    let mut parts: Vec<&str> = domain.split('.').rev().collect();
    parts.extend(components);
    let repo = parts.join(".");
    NON_WORD.replace_all(&repo, "_").into_owned()
}

/// Map a Go module path to a Bazel repository name, reversibly.
///
/// The result is also a valid Bazel module name. `/` maps to `_` while
/// `.` and `-` are preserved, so typical module paths transform as:
///
/// ```text
/// gopkg.in/yaml.v3         --> gopkg.in_yaml.v3
/// github.com/goccy/go-yaml --> github.com_goccy_go-yaml
/// ```
///
/// Module paths are never empty; an empty input encodes to an empty
/// string rather than panicking.
pub fn module_path_to_repo_name(module_path: &str) -> String {
    let mut path = module_path.to_string();

    // The leading path element is conventionally a domain name and cannot
    // start with '-' or '~', so only digits, uppercase letters, '_', and
    // '.' need the leading escape.
    if let Some(first) = path.chars().next() {
        if first.is_ascii_digit() || first.is_ascii_uppercase() || first == '_' || first == '.' {
            path = format!("a~{first}.a{}", &path[first.len_utf8()..]);
        }
    }

    if let Some(last) = path.chars().last() {
        if !last.is_ascii_alphanumeric() {
            path.push_str("/con");
        }
    }

    let mut name = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '_' => name.push_str("._."),
            '~' => name.push_str("._-"),
            '/' => name.push('_'),
            'A'..='Z' => {
                name.push_str("._");
                name.push(c.to_ascii_lowercase());
            }
            _ => name.push(c),
        }
    }
    name
}

/// Map a repository name obtained from [`module_path_to_repo_name`] back
/// to the Go module path it encodes.
///
/// # Errors
///
/// Returns a [`DecodeError`] if a `._` marker is truncated or followed by
/// a character that is not a recognized escape.
pub fn repo_name_to_module_path(repo_name: &str) -> Result<String, DecodeError> {
    let chars: Vec<char> = repo_name.chars().collect();
    let mut path = String::with_capacity(chars.len());

    // Forward scan with one character of lookahead for the '._' marker.
    let mut pos = 0;
    while pos < chars.len() {
        let c = chars[pos];
        if c == '_' {
            path.push('/');
            pos += 1;
            continue;
        }
        if c != '.' || pos + 1 == chars.len() || chars[pos + 1] != '_' {
            path.push(c);
            pos += 1;
            continue;
        }
        if pos + 2 == chars.len() {
            return Err(DecodeError::TruncatedEscape);
        }
        match chars[pos + 2] {
            '.' => path.push('_'),
            '-' => path.push('~'),
            c @ 'a'..='z' => path.push(c.to_ascii_uppercase()),
            other => return Err(DecodeError::InvalidEscape(other)),
        }
        pos += 3;
    }

    let path = ESCAPED_LEADING.replace(&path, "$1");
    Ok(path.strip_suffix("/con").unwrap_or(&path).to_string())
}
