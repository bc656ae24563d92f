// src/source/index.rs

use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::{DevloopError, Result};

/// Predicate over paths relative to the source root: tracked extension plus
/// exclude globs.
///
/// Shared between the scan (freshness inputs) and the watcher (change-event
/// filtering), so both agree on what counts as a source file.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    extensions: Vec<String>,
    exclude: Option<GlobSet>,
}

impl SourceFilter {
    pub fn new(extensions: &[String], exclude: &[String]) -> Result<Self> {
        let extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        let exclude = if exclude.is_empty() {
            None
        } else {
            Some(build_globset(exclude)?)
        };

        Ok(Self { extensions, exclude })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(&cfg.project.extensions, &cfg.watch.exclude)
    }

    /// Returns true if the given path (relative to the source root) is a
    /// tracked source file.
    pub fn matches(&self, rel_path: &Path) -> bool {
        let ext = match rel_path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => return false,
        };
        if !self.extensions.iter().any(|tracked| tracked == ext) {
            return false;
        }
        if let Some(exclude) = &self.exclude {
            let rel = rel_path.to_string_lossy().replace('\\', "/");
            if exclude.is_match(&rel) {
                return false;
            }
        }
        true
    }
}

/// Enumerates tracked files under the source root.
#[derive(Debug, Clone)]
pub struct SourceIndex {
    root: PathBuf,
    filter: SourceFilter,
}

impl SourceIndex {
    pub fn new(root: impl Into<PathBuf>, filter: SourceFilter) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self::new(
            cfg.project.source_dir.clone(),
            SourceFilter::from_config(cfg)?,
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the source tree and collect every tracked file.
    ///
    /// Symlinks are not followed, so link cycles cannot trap the walk. Each
    /// call re-scans from scratch; two scans of an unchanged tree return the
    /// same set (order is not part of the contract).
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(DevloopError::Scan {
                path: self.root.clone(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "source directory does not exist or is not a directory",
                ),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                DevloopError::Scan {
                    path,
                    source: err.into(),
                }
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            if self.filter.matches(rel) {
                files.push(entry.path().to_path_buf());
            }
        }

        debug!(root = %self.root.display(), files = files.len(), "source scan complete");
        Ok(files)
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).map_err(|err| {
            DevloopError::Config(format!("invalid glob pattern {pat:?}: {err}"))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|err| DevloopError::Config(format!("building exclude globset: {err}")))
}
