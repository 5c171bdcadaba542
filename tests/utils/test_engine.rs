use anyhow::Result;
use runtimes::{Engine, Options, Reporter, Run, Task};
use std::sync::Arc;

/// Minimal single-threaded engine: keeps registered reporters and fires
/// lifecycle events at them synchronously, in registration order.
pub struct TestEngine {
    reporters: Vec<Arc<dyn Reporter>>,
    attached: bool,
    options: Option<Options>,
}

impl TestEngine {
    pub fn new() -> Self {
        Self {
            reporters: vec![],
            attached: false,
            options: None,
        }
    }

    /// An engine that carries its own instance-scoped options bag.
    pub fn with_options(options: Options) -> Self {
        let mut engine = Self::new();
        engine.options = Some(options);
        engine
    }

    pub fn reporter_count(&self) -> usize {
        self.reporters.len()
    }

    pub fn emit_starting(&self, task: &Task, run: &Run) -> Result<()> {
        for reporter in &self.reporters {
            reporter.task_starting(task, run)?;
        }
        Ok(())
    }

    pub fn emit_finished(&self, task: &Task, run: &Run) -> Result<()> {
        for reporter in &self.reporters {
            reporter.task_finished(task, run)?;
        }
        Ok(())
    }

    pub fn emit_error(&self, error: &anyhow::Error, task: Option<&Task>) -> Result<()> {
        for reporter in &self.reporters {
            reporter.task_error(error, task)?;
        }
        Ok(())
    }
}

impl Engine for TestEngine {
    fn add_reporter(&mut self, reporter: Arc<dyn Reporter>) {
        self.reporters.push(reporter);
    }

    fn reporter_attached(&self) -> bool {
        self.attached
    }

    fn mark_reporter_attached(&mut self) {
        self.attached = true;
    }

    fn runtimes_options(&self) -> Option<Options> {
        self.options.clone()
    }
}
