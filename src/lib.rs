//! bzlmirror - Mirror Go modules into a Bazel module registry
//!
//! bzlmirror is a single-binary tool that mirrors Go modules into a Bazel
//! module registry layout: it encodes module paths as repository names,
//! fetches archives from a Go module proxy, and writes the registry's JSON
//! descriptors.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Pure domain logic: label grammar, path/name codec
//! - [`registry`] - Module proxy client, integrity hashing, descriptor store
//! - [`config`] - Configuration loading and precedence
//!
//! # Correctness Invariants
//!
//! bzlmirror maintains the following invariants:
//!
//! 1. The module-path encoding is bijective: `decode(encode(p)) == p` for
//!    every valid module path, and every encoded name is a valid Bazel
//!    module name
//! 2. Label parsing is canonical: rendering a parsed label and reparsing
//!    it yields an equal label
//! 3. Core operations are pure and deterministic; all I/O lives in
//!    [`registry`] and [`cli`]

pub mod cli;
pub mod config;
pub mod core;
pub mod registry;
