// src/tasks/registry.rs

use std::collections::HashMap;

use crate::errors::{DevloopError, Result};

/// What a task does when dispatched.
///
/// A closed set: tasks are wired up in [`builtin_registry`] at startup, never
/// discovered by scanning anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render the task listing.
    Help,
    /// Run the external dependency-install command.
    Install,
    /// Run the external static-check command.
    Check,
    /// Run the external build command, gated by the freshness checker.
    Build,
    /// Enter the watch loop.
    BuildWatch,
    /// Execute the built artifact directly.
    Run,
}

/// A named, described, invokable unit of work.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub action: Action,
}

/// In-memory task table.
///
/// Owns all [`Task`] instances; the dispatcher only ever borrows them.
/// Iteration order is registration order (the help renderer re-sorts by
/// name).
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task under a unique name.
    ///
    /// Fails with [`DevloopError::DuplicateTask`] if the name is already
    /// taken; the registry is unchanged after a failed call. Empty names or
    /// descriptions are registration bugs and are rejected outright.
    pub fn register(&mut self, name: &str, description: &str, action: Action) -> Result<()> {
        if name.is_empty() || description.is_empty() {
            return Err(DevloopError::Config(format!(
                "task registration requires a non-empty name and description (got name {name:?})"
            )));
        }
        if self.index.contains_key(name) {
            return Err(DevloopError::DuplicateTask(name.to_string()));
        }

        self.index.insert(name.to_string(), self.tasks.len());
        self.tasks.push(Task {
            name: name.to_string(),
            description: description.to_string(),
            action,
        });
        Ok(())
    }

    /// Look a task up by name.
    pub fn lookup(&self, name: &str) -> Result<&Task> {
        self.index
            .get(name)
            .map(|&i| &self.tasks[i])
            .ok_or_else(|| DevloopError::UnknownTask(name.to_string()))
    }

    /// All tasks in registration order. Restartable: each call iterates from
    /// the start.
    pub fn all(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Build the registry of built-in tasks.
///
/// A duplicate here is a programming error and fails startup.
pub fn builtin_registry() -> Result<TaskRegistry> {
    let mut registry = TaskRegistry::new();
    registry.register("help", "list available tasks", Action::Help)?;
    registry.register("install", "fetch project dependencies", Action::Install)?;
    registry.register("check", "run static checks on the source tree", Action::Check)?;
    registry.register(
        "build",
        "build the release artifact if sources changed",
        Action::Build,
    )?;
    registry.register(
        "build-watch",
        "watch sources and rebuild on every change",
        Action::BuildWatch,
    )?;
    registry.register("run", "execute the built artifact", Action::Run)?;
    Ok(registry)
}
