// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration as read from `Devloop.toml`.
///
/// ```toml
/// [project]
/// name = "spritesim"
/// source_dir = "src"
/// extensions = ["rs"]
///
/// [commands]
/// build = "cargo build --release"
///
/// [watch]
/// exclude = ["**/*.tmp.rs"]
/// debounce_ms = 300
/// ```
///
/// All sections are optional and have reasonable defaults; the only field
/// without a usable default is `[project] name`, which validation enforces.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Project metadata from `[project]`.
    #[serde(default)]
    pub project: ProjectSection,

    /// External tool command lines from `[commands]`.
    #[serde(default)]
    pub commands: CommandsSection,

    /// Watch-loop behaviour from `[watch]`.
    #[serde(default)]
    pub watch: WatchSection,
}

impl Config {
    /// Path of the single artifact this project builds.
    ///
    /// Derived from project metadata: `<target_dir>/release/<name>`.
    pub fn artifact_path(&self) -> PathBuf {
        self.project
            .target_dir
            .join("release")
            .join(&self.project.name)
    }

    /// Debounce window for the watch loop.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.watch.debounce_ms)
    }
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Logical name of the artifact. Required (validated, not defaulted).
    #[serde(default)]
    pub name: String,

    /// Root of the tracked source tree.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// File extensions (without the dot) that count as sources.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Build output directory; the artifact lives under `<target_dir>/release`.
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_extensions() -> Vec<String> {
    vec!["rs".to_string()]
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("target")
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: String::new(),
            source_dir: default_source_dir(),
            extensions: default_extensions(),
            target_dir: default_target_dir(),
        }
    }
}

/// `[commands]` section.
///
/// Each entry is an opaque shell command line; devloop only observes its
/// exit status.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsSection {
    /// Dependency-install step.
    #[serde(default = "default_install_cmd")]
    pub install: String,

    /// Static-check step.
    #[serde(default = "default_check_cmd")]
    pub check: String,

    /// Release build of the artifact.
    #[serde(default = "default_build_cmd")]
    pub build: String,
}

fn default_install_cmd() -> String {
    "cargo fetch".to_string()
}

fn default_check_cmd() -> String {
    "cargo check".to_string()
}

fn default_build_cmd() -> String {
    "cargo build --release".to_string()
}

impl Default for CommandsSection {
    fn default() -> Self {
        Self {
            install: default_install_cmd(),
            check: default_check_cmd(),
            build: default_build_cmd(),
        }
    }
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// Glob patterns (relative to `source_dir`) excluded from both the
    /// source scan and watch triggers.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Window within which successive change events coalesce into a single
    /// rebuild.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Restart the artifact after each successful rebuild.
    #[serde(default)]
    pub run: bool,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            debounce_ms: default_debounce_ms(),
            run: false,
        }
    }
}
