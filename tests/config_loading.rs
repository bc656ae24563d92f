use std::error::Error;
use std::fs;
use std::path::PathBuf;

use devloop::config::{load_and_validate, load_from_path, validate_config, Config};
use devloop::errors::DevloopError;
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_config_round_trips_from_toml() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Devloop.toml");
    fs::write(
        &path,
        r#"
[project]
name = "spritesim"
source_dir = "engine/src"
extensions = ["rs", "wgsl"]
target_dir = "out"

[commands]
install = "cargo fetch --locked"
check = "cargo clippy"
build = "cargo build --release --locked"

[watch]
exclude = ["**/*.gen.rs"]
debounce_ms = 150
run = true
"#,
    )?;

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.project.name, "spritesim");
    assert_eq!(cfg.project.source_dir, PathBuf::from("engine/src"));
    assert_eq!(cfg.project.extensions, ["rs", "wgsl"]);
    assert_eq!(cfg.commands.check, "cargo clippy");
    assert_eq!(cfg.watch.exclude, ["**/*.gen.rs"]);
    assert_eq!(cfg.watch.debounce_ms, 150);
    assert!(cfg.watch.run);
    assert_eq!(cfg.artifact_path(), PathBuf::from("out/release/spritesim"));

    Ok(())
}

#[test]
fn minimal_config_gets_the_defaults() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Devloop.toml");
    fs::write(&path, "[project]\nname = \"demo\"\n")?;

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.project.source_dir, PathBuf::from("src"));
    assert_eq!(cfg.project.extensions, ["rs"]);
    assert_eq!(cfg.commands.build, "cargo build --release");
    assert_eq!(cfg.watch.debounce_ms, 300);
    assert!(!cfg.watch.run);
    assert_eq!(cfg.artifact_path(), PathBuf::from("target/release/demo"));

    Ok(())
}

#[test]
fn empty_config_parses_but_fails_validation_on_missing_name() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Devloop.toml");
    fs::write(&path, "")?;

    let cfg = load_from_path(&path)?;
    let err = validate_config(&cfg).unwrap_err();
    assert!(matches!(err, DevloopError::Config(ref msg) if msg.contains("[project].name")));

    Ok(())
}

#[test]
fn zero_debounce_is_rejected() {
    let mut cfg = Config::default();
    cfg.project.name = "demo".to_string();
    cfg.watch.debounce_ms = 0;

    let err = validate_config(&cfg).unwrap_err();
    assert!(matches!(err, DevloopError::Config(ref msg) if msg.contains("debounce_ms")));
}

#[test]
fn invalid_exclude_glob_is_rejected() {
    let mut cfg = Config::default();
    cfg.project.name = "demo".to_string();
    cfg.watch.exclude.push("src/[".to_string());

    assert!(validate_config(&cfg).is_err());
}

#[test]
fn missing_config_file_is_an_error() {
    let err = load_from_path("definitely/not/a/real/Devloop.toml").unwrap_err();
    assert!(err.to_string().contains("reading config file"));
}
