use std::error::Error;

use devloop::tasks::help;
use devloop::tasks::registry::{builtin_registry, Action, TaskRegistry};
use devloop_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn listing_has_one_line_per_task_sorted_by_name() -> TestResult {
    init_tracing();

    let registry = builtin_registry()?;
    let out = help::render(registry.all(), false);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), registry.len());

    let names: Vec<&str> = lines
        .iter()
        .map(|line| line.split_whitespace().next().expect("line has a name"))
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    Ok(())
}

#[test]
fn descriptions_align_to_the_widest_name() -> TestResult {
    let mut registry = TaskRegistry::new();
    registry.register("a", "first", Action::Check)?;
    registry.register("long-task-name", "second", Action::Check)?;

    let out = help::render(registry.all(), false);

    // Name column width is the widest name (14 > MIN_NAME_WIDTH), so every
    // description starts at the same column: 2 + 14 + 2.
    let col = 2 + "long-task-name".len() + 2;
    for line in out.lines() {
        let desc: &str = line.split_whitespace().nth(1).expect("line has a description");
        assert_eq!(&line[col..], desc);
    }

    Ok(())
}

#[test]
fn minimum_column_width_applies_to_short_names() -> TestResult {
    let mut registry = TaskRegistry::new();
    registry.register("a", "first", Action::Check)?;
    registry.register("b", "second", Action::Check)?;

    let out = help::render(registry.all(), false);

    let col = 2 + help::MIN_NAME_WIDTH + 2;
    for (line, desc) in out.lines().zip(["first", "second"]) {
        assert_eq!(&line[col..], desc);
    }

    Ok(())
}

#[test]
fn empty_registry_renders_empty_listing() {
    let registry = TaskRegistry::new();
    assert!(help::render(registry.all(), false).is_empty());
}

#[test]
fn colored_listing_styles_names_without_shifting_descriptions() -> TestResult {
    let mut registry = TaskRegistry::new();
    registry.register("build", "compile things", Action::Build)?;

    let plain = help::render(registry.all(), false);
    let colored = help::render(registry.all(), true);

    assert_ne!(plain, colored);
    assert!(colored.contains("\u{1b}["));

    // Stripping the styling yields exactly the plain rendering, so padding
    // must have been computed from the raw name.
    let stripped = console::strip_ansi_codes(&colored).to_string();
    assert_eq!(stripped, plain);

    Ok(())
}
