// src/tasks/help.rs

//! Help listing rendered from the task registry.
//!
//! Pure transformation: the registry holds descriptions as first-class data,
//! so the listing never re-parses any source text.

use console::style;

use crate::tasks::registry::Task;

/// Minimum width of the name column, so short task sets still line up.
pub const MIN_NAME_WIDTH: usize = 12;

/// Render the task listing: one line per task, sorted by name, name column
/// padded to the widest name.
///
/// `color` decides whether task names get terminal styling; callers pass the
/// result of tty detection for the stream they print to. An empty registry
/// renders an empty listing.
pub fn render<'a>(tasks: impl IntoIterator<Item = &'a Task>, color: bool) -> String {
    let mut tasks: Vec<&Task> = tasks.into_iter().collect();
    tasks.sort_by(|a, b| a.name.cmp(&b.name));

    let width = tasks
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let mut out = String::new();
    for task in tasks {
        // Padding is computed from the raw name length; styling codes are
        // invisible and must not shift the description column.
        let pad = " ".repeat(width - task.name.len());
        let name = if color {
            style(&task.name).cyan().bold().force_styling(true).to_string()
        } else {
            task.name.clone()
        };
        out.push_str("  ");
        out.push_str(&name);
        out.push_str(&pad);
        out.push_str("  ");
        out.push_str(&task.description);
        out.push('\n');
    }
    out
}

/// Whether stdout can take colors (used by the `help` task).
pub fn stdout_supports_color() -> bool {
    console::Term::stdout().features().colors_supported()
}

/// Whether stderr can take colors (used by the unknown-task fallback).
pub fn stderr_supports_color() -> bool {
    console::Term::stderr().features().colors_supported()
}
