//! core
//!
//! Pure domain logic for bzlmirror.
//!
//! # Modules
//!
//! - [`label`] - Bazel label parsing, rendering, and comparison
//! - [`repo_name`] - module path <-> repository name conversions
//!
//! # Design Principles
//!
//! - Everything here is a pure, synchronous function over immutable
//!   inputs: no I/O, no shared mutable state, safe to call from any
//!   thread without locking
//! - Identical input always yields identical output
//! - Validation patterns are built once and shared read-only

pub mod label;
pub mod repo_name;
