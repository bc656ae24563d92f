// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the external tool
//! commands, using `tokio::process::Command`, and reporting their exit
//! status back to the dispatcher and watch runtime.
//!
//! - [`command`] spawns shell commands and the artifact binary. Stdio is
//!   inherited: the developer sees tool output live, never buffered and
//!   replayed.
//! - [`backend`] provides the `CommandBackend` trait and the concrete
//!   `ShellBackend` used in production, which tests replace with a fake
//!   implementation.

pub mod backend;
pub mod command;

pub use backend::{CommandBackend, ShellBackend};
pub use command::{run_binary, run_shell, spawn_binary};
