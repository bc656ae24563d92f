#![allow(dead_code)]

use std::path::PathBuf;

use devloop::config::{validate_config, Config};

/// Builder for `Config` to simplify test setup.
///
/// Starts from the serde defaults with the given project name and finishes
/// by running the real validation, so tests can't accidentally construct a
/// config production would reject.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new(name: &str) -> Self {
        let mut config = Config::default();
        config.project.name = name.to_string();
        Self { config }
    }

    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.project.source_dir = dir.into();
        self
    }

    pub fn target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.project.target_dir = dir.into();
        self
    }

    pub fn extensions(mut self, exts: &[&str]) -> Self {
        self.config.project.extensions = exts.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.config.watch.exclude.push(pattern.to_string());
        self
    }

    pub fn install_command(mut self, cmd: &str) -> Self {
        self.config.commands.install = cmd.to_string();
        self
    }

    pub fn check_command(mut self, cmd: &str) -> Self {
        self.config.commands.check = cmd.to_string();
        self
    }

    pub fn build_command(mut self, cmd: &str) -> Self {
        self.config.commands.build = cmd.to_string();
        self
    }

    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.config.watch.debounce_ms = ms;
        self
    }

    pub fn watch_run(mut self, val: bool) -> Self {
        self.config.watch.run = val;
        self
    }

    pub fn build(self) -> Config {
        validate_config(&self.config).expect("builder produced invalid config");
        self.config
    }
}
