// src/tasks/mod.rs

//! Task registry, help rendering, and dispatch.
//!
//! - [`registry`] owns the name → (description, action) table, built once at
//!   startup by explicit registration calls.
//! - [`help`] turns the registry into the self-documenting listing.
//! - [`dispatch`] resolves a requested task name and executes its action,
//!   propagating the external tool's exit status.

pub mod dispatch;
pub mod help;
pub mod registry;

pub use dispatch::{dispatch, TaskContext};
pub use registry::{builtin_registry, Action, Task, TaskRegistry};
