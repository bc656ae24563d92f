use std::error::Error;
use std::time::Duration;

use devloop::watch::{WatchEvent, WatchPlan, WatchRuntime};
use devloop_test_utils::fake_backend::FakeBackend;
use devloop_test_utils::{init_tracing, with_timeout};
use tokio::sync::mpsc;
use tokio::time::sleep;

type TestResult = Result<(), Box<dyn Error>>;

fn plan(debounce_ms: u64) -> WatchPlan {
    WatchPlan {
        build_cmd: "build-the-artifact".to_string(),
        artifact: None,
        debounce: Duration::from_millis(debounce_ms),
    }
}

#[tokio::test]
async fn changes_within_the_debounce_window_cause_one_rebuild() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::channel(16);
    let backend = FakeBackend::new();
    let runtime = WatchRuntime::new(plan(50), rx, Box::new(backend.clone()));
    let handle = tokio::spawn(runtime.run());

    tx.send(WatchEvent::Changed("src/a.rs".into())).await.unwrap();
    tx.send(WatchEvent::Changed("src/b.rs".into())).await.unwrap();

    sleep(Duration::from_millis(250)).await;
    assert_eq!(backend.invocation_count(), 1);

    tx.send(WatchEvent::Interrupted).await.unwrap();
    with_timeout(handle).await??;

    Ok(())
}

#[tokio::test]
async fn changes_in_separate_windows_cause_separate_rebuilds() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::channel(16);
    let backend = FakeBackend::new();
    let runtime = WatchRuntime::new(plan(50), rx, Box::new(backend.clone()));
    let handle = tokio::spawn(runtime.run());

    tx.send(WatchEvent::Changed("src/a.rs".into())).await.unwrap();
    sleep(Duration::from_millis(250)).await;
    assert_eq!(backend.invocation_count(), 1);

    tx.send(WatchEvent::Changed("src/a.rs".into())).await.unwrap();
    sleep(Duration::from_millis(250)).await;
    assert_eq!(backend.invocation_count(), 2);

    tx.send(WatchEvent::Interrupted).await.unwrap();
    with_timeout(handle).await??;

    Ok(())
}

#[tokio::test]
async fn interrupt_while_idle_stops_the_loop_without_building() -> TestResult {
    let (tx, rx) = mpsc::channel(16);
    let backend = FakeBackend::new();
    let runtime = WatchRuntime::new(plan(50), rx, Box::new(backend.clone()));
    let handle = tokio::spawn(runtime.run());

    tx.send(WatchEvent::Interrupted).await.unwrap();
    with_timeout(handle).await??;
    assert_eq!(backend.invocation_count(), 0);

    Ok(())
}
