// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::source::SourceFilter;
use crate::watch::runtime::WatchEvent;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle stops file watching — the
/// watch runtime holds it for exactly the lifetime of the loop, so no
/// subscription outlives the loop.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher that observes the given `root` directory
/// recursively and sends [`WatchEvent::Changed`] for every path the source
/// filter accepts.
///
/// - `root` is the source tree all relative matching is evaluated against.
/// - `filter` decides which changed paths count as sources.
/// - `runtime_tx` is the channel into the watch runtime.
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    filter: SourceFilter,
    runtime_tx: mpsc::Sender<WatchEvent>,
) -> Result<WatcherHandle> {
    let root = root.into();
    let root = root.canonicalize().unwrap_or_else(|_| root.clone()); // best-effort

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // Can't log via tracing from notify's thread safely here;
                    // fall back to stderr.
                    eprintln!("devloop: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("devloop: file watch error: {err}");
            }
        },
        Config::default(),
    )
    .map_err(anyhow::Error::from)?;

    watcher
        .watch(&root, RecursiveMode::Recursive)
        .map_err(anyhow::Error::from)?;

    info!(root = %root.display(), "file watcher started");

    // Async task that consumes notify events and forwards accepted changes
    // to the runtime.
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            // Reads are not changes.
            if matches!(event.kind, EventKind::Access(_)) {
                continue;
            }
            debug!(?event, "received notify event");

            for path in &event.paths {
                let rel = match rel_path(&root, path) {
                    Some(rel) => rel,
                    None => {
                        warn!(path = %path.display(), root = %root.display(),
                              "could not relativize changed path against watch root");
                        continue;
                    }
                };

                if !filter.matches(&rel) {
                    continue;
                }

                debug!(path = %rel.display(), "source change accepted");
                if runtime_tx
                    .send(WatchEvent::Changed(path.clone()))
                    .await
                    .is_err()
                {
                    // Runtime gone; no point keeping the forward loop alive.
                    debug!("watch runtime channel closed, stopping event forwarding");
                    return;
                }
            }
        }

        debug!("file watcher event stream ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Path relative to `root`, or `None` if the path is not under `root`.
fn rel_path(root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}
