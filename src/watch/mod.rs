// src/watch/mod.rs

//! File watching and the rebuild loop.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) scoped to the
//!   source tree.
//! - Turning raw change notifications into debounced, serialized rebuilds.
//!
//! It does **not** know how commands are executed; it drives a
//! [`CommandBackend`](crate::exec::CommandBackend) and observes exit codes.

pub mod runtime;
pub mod watcher;

pub use runtime::{WatchEvent, WatchPlan, WatchRuntime};
pub use watcher::{spawn_watcher, WatcherHandle};

use tokio::sync::mpsc;
use tracing::warn;

use crate::errors::Result;
use crate::source::SourceFilter;
use crate::tasks::dispatch::TaskContext;

/// Capacity of the change-notification channel into the runtime. Events
/// arriving while a build runs queue here; the sender side awaits if the
/// loop falls this far behind.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Wire up watcher + Ctrl-C handling + runtime, and run until interrupted.
///
/// This is the `build-watch` task's action. A clean stop exits 0.
pub async fn run_watch(ctx: TaskContext) -> Result<i32> {
    let cfg = &ctx.config;
    let filter = SourceFilter::from_config(cfg)?;

    let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

    let _watcher = spawn_watcher(cfg.project.source_dir.clone(), filter, events_tx.clone())?;

    // Ctrl-C → Stopped.
    {
        let tx = events_tx.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    let _ = tx.send(WatchEvent::Interrupted).await;
                }
                Err(err) => warn!(error = %err, "failed to listen for Ctrl+C"),
            }
        });
    }

    let run_after_build = ctx.run_after_build || cfg.watch.run;
    let plan = WatchPlan {
        build_cmd: cfg.commands.build.clone(),
        artifact: run_after_build.then(|| cfg.artifact_path()),
        debounce: cfg.debounce(),
    };

    WatchRuntime::new(plan, events_rx, ctx.backend).run().await?;
    Ok(0)
}
