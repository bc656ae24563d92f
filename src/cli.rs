// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `devloop`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "devloop",
    version,
    about = "Minimal task runner: build, check and run a single binary, with a watch loop.",
    long_about = None,
    // The `help` task renders the registry listing itself.
    disable_help_subcommand = true
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Devloop.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Devloop.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEVLOOP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Task to run. Defaults to `help`.
    #[command(subcommand)]
    pub task: Option<TaskCommand>,
}

/// Built-in task surface.
///
/// Unknown names are captured by the `Other` variant and resolved against the
/// task registry, so a typo gets the registry's help fallback instead of a
/// clap usage error.
#[derive(Debug, Clone, Subcommand)]
pub enum TaskCommand {
    /// List available tasks.
    Help,
    /// Fetch project dependencies.
    Install,
    /// Run static checks on the source tree.
    Check,
    /// Build the release artifact if sources changed.
    Build,
    /// Watch sources and rebuild on every change.
    BuildWatch {
        /// Also (re)start the artifact after each successful build.
        #[arg(long)]
        run: bool,
    },
    /// Execute the built artifact.
    Run,
    #[command(external_subcommand)]
    Other(Vec<String>),
}

impl CliArgs {
    /// Registry name of the requested task. No task means `help`.
    pub fn task_name(&self) -> String {
        match &self.task {
            None | Some(TaskCommand::Help) => "help".to_string(),
            Some(TaskCommand::Install) => "install".to_string(),
            Some(TaskCommand::Check) => "check".to_string(),
            Some(TaskCommand::Build) => "build".to_string(),
            Some(TaskCommand::BuildWatch { .. }) => "build-watch".to_string(),
            Some(TaskCommand::Run) => "run".to_string(),
            Some(TaskCommand::Other(args)) => args
                .first()
                .cloned()
                .unwrap_or_else(|| "help".to_string()),
        }
    }

    /// Whether `build-watch` should restart the artifact after each build.
    pub fn watch_run(&self) -> bool {
        matches!(self.task, Some(TaskCommand::BuildWatch { run: true }))
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
