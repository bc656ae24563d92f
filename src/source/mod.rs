// src/source/mod.rs

//! Source tree indexing and artifact freshness.
//!
//! - [`index`] enumerates tracked source files (extension filter + exclude
//!   globs) under the source root.
//! - [`freshness`] decides whether the artifact needs a rebuild, using
//!   dependency-timestamp semantics.

pub mod freshness;
pub mod index;

pub use freshness::is_stale;
pub use index::{SourceFilter, SourceIndex};
