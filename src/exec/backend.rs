// src/exec/backend.rs

//! Pluggable command backend abstraction.
//!
//! The dispatcher and the watch runtime talk to a `CommandBackend` instead
//! of spawning processes directly. This makes it easy to swap in a fake
//! backend in tests while keeping the production implementation in
//! [`command`].
//!
//! - `ShellBackend` is the default implementation used by `devloop`. It runs
//!   each command line through the platform shell with inherited stdio.
//! - Tests can provide their own `CommandBackend` that records which
//!   commands were invoked and returns scripted exit codes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::command::run_shell;

/// Trait abstracting how external tool commands are executed.
///
/// The returned future resolves to the command's exit code; spawn failures
/// are errors, non-zero exits are not (the caller decides how to propagate
/// them).
pub trait CommandBackend: Send {
    fn run(&mut self, command: String) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>>;
}

/// Real backend used in production: one platform shell invocation per
/// command, output streaming through to the developer's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellBackend;

impl CommandBackend for ShellBackend {
    fn run(&mut self, command: String) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        Box::pin(async move { run_shell(&command).await })
    }
}
