// src/source/freshness.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;

/// Decide whether the artifact needs a rebuild.
///
/// Dependency-timestamp semantics:
/// - a missing artifact is stale;
/// - any source strictly newer than the artifact makes it stale;
/// - otherwise it is fresh. Equal timestamps count as fresh, so coarse
///   filesystem timestamp resolution cannot force spurious rebuilds.
///
/// Pure query: nothing is written, no caches are kept.
pub fn is_stale(artifact: &Path, sources: &[PathBuf]) -> Result<bool> {
    let artifact_mtime = match fs::metadata(artifact) {
        Ok(meta) => meta
            .modified()
            .with_context(|| format!("reading mtime of artifact {:?}", artifact))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(artifact = %artifact.display(), "artifact missing, build needed");
            return Ok(true);
        }
        Err(err) => return Err(err.into()),
    };

    for source in sources {
        let mtime = fs::metadata(source)
            .and_then(|meta| meta.modified())
            .with_context(|| format!("reading mtime of source {:?}", source))?;
        if mtime > artifact_mtime {
            debug!(source = %source.display(), "source newer than artifact, build needed");
            return Ok(true);
        }
    }

    Ok(false)
}
