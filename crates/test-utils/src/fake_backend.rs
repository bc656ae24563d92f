use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use devloop::errors::Result;
use devloop::exec::CommandBackend;

/// A fake command backend that:
/// - records every command it is asked to run
/// - returns scripted exit codes instead of spawning real processes
/// - can simulate a build that takes a while, for queued-while-building tests
///
/// Clones share state, so a test can hand one clone to the runtime and keep
/// another for assertions.
#[derive(Clone, Default)]
pub struct FakeBackend {
    invocations: Arc<Mutex<Vec<String>>>,
    outcomes: Arc<Mutex<VecDeque<i32>>>,
    delay: Option<Duration>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes returned by successive invocations; once the script is
    /// exhausted, every further invocation succeeds with 0.
    pub fn with_outcomes(self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.outcomes.lock().unwrap().extend(codes);
        self
    }

    /// Make every invocation take this long before completing.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl CommandBackend for FakeBackend {
    fn run(&mut self, command: String) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        let invocations = Arc::clone(&self.invocations);
        let outcomes = Arc::clone(&self.outcomes);
        let delay = self.delay;

        Box::pin(async move {
            invocations.lock().unwrap().push(command);
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let code = outcomes.lock().unwrap().pop_front().unwrap_or(0);
            Ok(code)
        })
    }
}
