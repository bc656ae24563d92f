// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod source;
pub mod tasks;
pub mod watch;

use std::path::PathBuf;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::Config;
use crate::errors::Result;
use crate::exec::ShellBackend;
use crate::tasks::dispatch::{dispatch, TaskContext};
use crate::tasks::registry::{builtin_registry, Action};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the built-in task registry
/// - config loading (skipped for `help` and the unknown-task fallback,
///   which must work without a config file)
/// - the production shell backend
/// - dispatch, whose exit code becomes the process exit code
pub async fn run(args: CliArgs) -> Result<i32> {
    let registry = builtin_registry()?;
    let name = args.task_name();

    let config = match registry.lookup(&name) {
        Ok(task) if task.action == Action::Help => Config::default(),
        Err(_) => Config::default(),
        Ok(_) => load_and_validate(PathBuf::from(&args.config))?,
    };

    let ctx = TaskContext {
        config,
        backend: Box::new(ShellBackend),
        run_after_build: args.watch_run(),
    };

    dispatch(&registry, &name, ctx).await
}
