//! registry
//!
//! The registry-sync subsystem: everything between the pure [`core`]
//! components and the outside world.
//!
//! # Modules
//!
//! - [`traits`] - the [`ModuleProxy`] abstraction and [`RegistryError`]
//! - [`goproxy`] - reqwest client for the Go module proxy protocol
//! - [`integrity`] - `sha256-`/base64 content hashes
//! - [`schema`] - `metadata.json` / `source.json` descriptor types
//! - [`store`] - registry directory layout and persistence
//! - [`sync`] - orchestration of one module-version mirror
//!
//! [`core`]: crate::core

pub mod goproxy;
pub mod integrity;
pub mod schema;
pub mod store;
pub mod sync;
pub mod traits;

pub use traits::{ModuleProxy, RegistryError};
