// src/exec/command.rs

use std::path::Path;
use std::process::ExitStatus;

use anyhow::Context;
use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::errors::Result;

/// Run a command line through the platform shell and wait for it.
///
/// Stdio is inherited, so the external tool's output streams through
/// unmodified. The child is spawned with `kill_on_drop`: if the future is
/// dropped mid-wait (watch loop interrupted), the process is terminated
/// rather than leaked.
pub async fn run_shell(command: &str) -> Result<i32> {
    info!(%command, "starting external command");

    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    };

    let mut child = cmd
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("spawning shell command '{command}'"))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for shell command '{command}'"))?;

    let code = exit_code(status);
    debug!(%command, exit_code = code, "external command exited");
    Ok(code)
}

/// Execute the artifact binary directly (no shell) and wait for it.
pub async fn run_binary(path: &Path) -> Result<i32> {
    info!(artifact = %path.display(), "executing artifact");

    let mut child = Command::new(path)
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("executing artifact {:?}", path))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for artifact {:?}", path))?;

    Ok(exit_code(status))
}

/// Spawn the artifact binary as a long-lived child.
///
/// Used by the watch loop's run-after-build mode; `kill_on_drop` guarantees
/// the instance dies with its handle.
pub fn spawn_binary(path: &Path) -> Result<Child> {
    let child = Command::new(path)
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("starting artifact {:?}", path))?;
    Ok(child)
}

fn exit_code(status: ExitStatus) -> i32 {
    // Killed by signal: no code; report -1 like a generic failure.
    status.code().unwrap_or(-1)
}
