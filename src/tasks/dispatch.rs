// src/tasks/dispatch.rs

//! Task dispatch: name → registry lookup → action execution.
//!
//! The dispatcher propagates the external tool's exit status as its own
//! result; a non-zero collaborator exit becomes
//! [`DevloopError::ExternalTool`], never a swallowed success.

use tracing::info;

use crate::config::Config;
use crate::errors::{DevloopError, Result};
use crate::exec::{self, CommandBackend};
use crate::source::{is_stale, SourceIndex};
use crate::tasks::help;
use crate::tasks::registry::{Action, TaskRegistry};
use crate::watch;

/// Everything an action needs to run.
///
/// The backend is behind a trait so tests can swap the real shell runner for
/// a recording fake.
pub struct TaskContext {
    pub config: Config,
    pub backend: Box<dyn CommandBackend>,
    pub run_after_build: bool,
}

/// Resolve `name` against the registry and execute the task's action.
///
/// Unknown names print the help listing to stderr before failing, so a typo
/// shows the developer what is available.
pub async fn dispatch(registry: &TaskRegistry, name: &str, mut ctx: TaskContext) -> Result<i32> {
    let task = match registry.lookup(name) {
        Ok(task) => task,
        Err(err) => {
            eprint!("{}", help::render(registry.all(), help::stderr_supports_color()));
            return Err(err);
        }
    };

    info!(task = %task.name, "dispatching task");

    match task.action {
        Action::Help => {
            print!("{}", help::render(registry.all(), help::stdout_supports_color()));
            Ok(0)
        }
        Action::Install => {
            invoke(ctx.backend.as_mut(), "install", &ctx.config.commands.install).await
        }
        Action::Check => invoke(ctx.backend.as_mut(), "check", &ctx.config.commands.check).await,
        Action::Build => build(&mut ctx).await,
        Action::BuildWatch => watch::run_watch(ctx).await,
        Action::Run => {
            let artifact = ctx.config.artifact_path();
            let code = exec::run_binary(&artifact).await?;
            if code != 0 {
                return Err(DevloopError::ExternalTool {
                    task: "run".to_string(),
                    code,
                });
            }
            Ok(0)
        }
    }
}

/// The freshness-gated build action.
///
/// Scans the source tree and invokes the external build tool only when the
/// artifact is missing or older than some source. The skip is an
/// optimization, never error suppression: when the tool does run, its exit
/// status is propagated untouched.
pub async fn build(ctx: &mut TaskContext) -> Result<i32> {
    let index = SourceIndex::from_config(&ctx.config)?;
    let sources = index.scan()?;
    let artifact = ctx.config.artifact_path();

    if !is_stale(&artifact, &sources)? {
        info!(artifact = %artifact.display(), "artifact is up to date, skipping build");
        return Ok(0);
    }

    invoke(ctx.backend.as_mut(), "build", &ctx.config.commands.build).await
}

async fn invoke(backend: &mut dyn CommandBackend, task: &str, command: &str) -> Result<i32> {
    let code = backend.run(command.to_string()).await?;
    if code != 0 {
        return Err(DevloopError::ExternalTool {
            task: task.to_string(),
            code,
        });
    }
    Ok(0)
}
