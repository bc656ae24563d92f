// src/watch/runtime.rs

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::{self, CommandBackend};

/// Events sent into the watch runtime.
///
/// - the watcher sends `Changed`
/// - Ctrl-C handling sends `Interrupted`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    Changed(PathBuf),
    Interrupted,
}

/// What the runtime does on each change.
#[derive(Debug, Clone)]
pub struct WatchPlan {
    /// External build command, run once per coalesced change set.
    pub build_cmd: String,

    /// If set, (re)start this binary after each successful build, killing
    /// the previous instance first.
    pub artifact: Option<PathBuf>,

    /// Quiet window: changes closer together than this merge into one
    /// rebuild.
    pub debounce: Duration,
}

/// Outcome of waiting for a build while still listening for events.
enum BuildWait {
    Finished(Result<i32>),
    Stopped,
}

/// The watch loop state machine: `Idle → Building → Idle → …`, terminal
/// `Stopped` on interrupt or fatal error.
///
/// Serialization is structural: the loop `await`s each build before looking
/// at the next state transition, so at most one build ever runs. Changes
/// arriving while `Building` queue in the event channel and in `pending`;
/// after a build completes they coalesce into exactly one follow-up build.
/// A failed build is reported and the loop returns to `Idle` — it never
/// stops the watch.
pub struct WatchRuntime {
    plan: WatchPlan,
    events_rx: mpsc::Receiver<WatchEvent>,
    backend: Box<dyn CommandBackend>,
    /// Running artifact instance in run-after-build mode.
    child: Option<Child>,
}

impl WatchRuntime {
    pub fn new(
        plan: WatchPlan,
        events_rx: mpsc::Receiver<WatchEvent>,
        backend: Box<dyn CommandBackend>,
    ) -> Self {
        Self {
            plan,
            events_rx,
            backend,
            child: None,
        }
    }

    /// Main loop. Returns `Ok(())` on a clean stop (interrupt or channel
    /// closed); fatal backend errors propagate.
    pub async fn run(mut self) -> Result<()> {
        info!("watch loop started");

        let mut pending: HashSet<PathBuf> = HashSet::new();

        'watch: loop {
            // Idle: wait for a change unless one is already queued from the
            // previous build.
            if pending.is_empty() {
                match self.events_rx.recv().await {
                    Some(WatchEvent::Changed(path)) => {
                        pending.insert(path);
                    }
                    Some(WatchEvent::Interrupted) | None => break 'watch,
                }
            }

            // Debounce: merge changes until the tree goes quiet.
            if self.settle(&mut pending).await {
                break 'watch;
            }

            info!(changed = pending.len(), "source change detected, rebuilding");
            pending.clear();

            // Building: race the build against the event stream so an
            // interrupt kills the in-flight subprocess instead of waiting
            // for it. Change events observed meanwhile land in `pending`
            // and trigger the next cycle immediately.
            let wait = {
                let build = self.backend.run(self.plan.build_cmd.clone());
                tokio::select! {
                    outcome = build => BuildWait::Finished(outcome),
                    _ = drain_changes(&mut self.events_rx, &mut pending) => BuildWait::Stopped,
                }
            };

            match wait {
                BuildWait::Finished(outcome) => self.after_build(outcome?),
                BuildWait::Stopped => break 'watch,
            }
        }

        if let Some(mut child) = self.child.take() {
            debug!("stopping artifact instance");
            let _ = child.start_kill();
        }

        info!("watch loop stopped");
        Ok(())
    }

    /// Drain events until no change arrives for a full debounce window.
    /// Returns `true` when the loop should stop.
    async fn settle(&mut self, pending: &mut HashSet<PathBuf>) -> bool {
        loop {
            match timeout(self.plan.debounce, self.events_rx.recv()).await {
                // Quiet period elapsed; the change set is complete.
                Err(_) => return false,
                Ok(Some(WatchEvent::Changed(path))) => {
                    pending.insert(path);
                }
                Ok(Some(WatchEvent::Interrupted)) | Ok(None) => return true,
            }
        }
    }

    fn after_build(&mut self, code: i32) {
        if code != 0 {
            warn!(exit_code = code, "build failed, waiting for next change");
            return;
        }

        info!("build succeeded");

        if let Some(artifact) = self.plan.artifact.clone() {
            if let Some(mut old) = self.child.take() {
                debug!("stopping previous artifact instance");
                let _ = old.start_kill();
            }
            match exec::spawn_binary(&artifact) {
                Ok(child) => {
                    info!(artifact = %artifact.display(), "artifact restarted");
                    self.child = Some(child);
                }
                // The next successful build gets another chance.
                Err(err) => warn!(error = %err, "failed to start artifact"),
            }
        }
    }
}

/// Buffer change events while a build runs; resolves only when the loop
/// should stop (interrupt or closed channel).
async fn drain_changes(
    events_rx: &mut mpsc::Receiver<WatchEvent>,
    pending: &mut HashSet<PathBuf>,
) {
    loop {
        match events_rx.recv().await {
            Some(WatchEvent::Changed(path)) => {
                pending.insert(path);
            }
            Some(WatchEvent::Interrupted) | None => return,
        }
    }
}
