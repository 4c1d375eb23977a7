use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use gofer::exec::{Action, ActionFuture};
use gofer::manual::ActionRef;

/// Shared log of `(task, arguments)` calls, in call order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Action for `task` that records its call and succeeds.
    pub fn action(&self, task: &str) -> ActionRef {
        Arc::new(RecordingAction {
            task: task.to_string(),
            log: self.clone(),
            fail: false,
        })
    }

    /// Action for `task` that records its call and then fails.
    pub fn failing_action(&self, task: &str) -> ActionRef {
        Arc::new(RecordingAction {
            task: task.to_string(),
            log: self.clone(),
            fail: true,
        })
    }

    /// Names of the tasks called so far.
    pub fn tasks(&self) -> Vec<String> {
        let guard = self.calls.lock().unwrap();
        guard.iter().map(|(task, _)| task.clone()).collect()
    }

    /// Full call records.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, task: &str, args: &[String]) {
        let mut guard = self.calls.lock().unwrap();
        guard.push((task.to_string(), args.to_vec()));
    }
}

/// A fake action that:
/// - records that it was called (and with which arguments)
/// - succeeds, or fails with `"<task> failed"`.
pub struct RecordingAction {
    task: String,
    log: CallLog,
    fail: bool,
}

impl Action for RecordingAction {
    fn call<'a>(&'a self, args: &'a [String]) -> ActionFuture<'a> {
        Box::pin(async move {
            self.log.record(&self.task, args);
            if self.fail {
                Err(anyhow!("{} failed", self.task))
            } else {
                Ok(())
            }
        })
    }
}
