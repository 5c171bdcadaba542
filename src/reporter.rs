use crate::engine::{Run, Task};
use crate::options::ResolvedOptions;
use crate::render::{self, paint, Tint};
use crate::writer::Writer;
use anyhow::Result;

/// Lifecycle listener contract between a host engine and this crate. All
/// methods default to doing nothing so partial listeners stay cheap to
/// write. A whole build's lifecycle uses the same start/finish methods, with
/// the build's identity passed as the task.
///
/// Handlers run synchronously inside the engine's emission call and must
/// cope with any number of firings per task, in whatever order concurrent
/// tasks produce them.
pub trait Reporter: Send + Sync {
    fn task_starting(&self, _task: &Task, _run: &Run) -> Result<()> {
        Ok(())
    }

    fn task_finished(&self, _task: &Task, _run: &Run) -> Result<()> {
        Ok(())
    }

    fn task_error(&self, _error: &anyhow::Error, _task: Option<&Task>) -> Result<()> {
        Ok(())
    }
}

/// Renders one status line per lifecycle event and writes it immediately.
pub struct RuntimeReporter {
    options: ResolvedOptions,
    writer: Writer,
}

impl RuntimeReporter {
    pub fn new(options: ResolvedOptions) -> Self {
        let writer = Writer::new(options.stream.clone());
        RuntimeReporter { options, writer }
    }
}

impl Reporter for RuntimeReporter {
    fn task_starting(&self, task: &Task, run: &Run) -> Result<()> {
        self.writer.writeln(&[
            render::time(run.started_at, &self.options),
            paint(Tint::Start, "starting", self.options.colors),
            render::name(&task.name, &self.options),
        ])?;
        Ok(())
    }

    fn task_finished(&self, task: &Task, run: &Run) -> Result<()> {
        // A payload missing its end timestamp or duration still renders a
        // structurally complete line.
        let finished_at = run.finished_at.unwrap_or(run.started_at);
        let elapsed = run.duration.unwrap_or_default();
        self.writer.writeln(&[
            render::time(finished_at, &self.options),
            paint(Tint::Finish, "finished", self.options.colors),
            render::name(&task.name, &self.options),
            render::duration(elapsed, &self.options),
        ])?;
        Ok(())
    }

    fn task_error(&self, error: &anyhow::Error, task: Option<&Task>) -> Result<()> {
        let name = task.map(|task| task.name.as_str()).unwrap_or("");
        self.writer.writeln(&[
            paint(Tint::Fail, "ERROR", self.options.colors),
            render::name(name, &self.options),
            format!("{:#}", error),
        ])?;
        Ok(())
    }
}
