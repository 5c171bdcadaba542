use crate::options::Options;
use crate::reporter::Reporter;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// A named unit of work tracked by the host engine. The name is allowed to
/// be empty and renders as an empty field.
#[derive(Clone, Debug, Default)]
pub struct Task {
    pub name: String,
}

impl Task {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Task { name: name.into() }
    }
}

/// One execution of a task, or of a whole build. The engine owns this
/// record; reporters read it inside the handler call and keep nothing.
#[derive(Clone, Debug)]
pub struct Run {
    pub started_at: SystemTime,
    pub finished_at: Option<SystemTime>,
    pub duration: Option<Duration>,
}

impl Run {
    pub fn started(at: SystemTime) -> Self {
        Run {
            started_at: at,
            finished_at: None,
            duration: None,
        }
    }

    /// Marks the run finished. The duration saturates to zero if the clock
    /// went backwards.
    pub fn finish(&mut self, at: SystemTime) {
        self.duration = Some(at.duration_since(self.started_at).unwrap_or_default());
        self.finished_at = Some(at);
    }
}

/// What the reporter needs from a host engine: a listener registry, the
/// per-instance attachment flag, and an optional instance-scoped options bag.
pub trait Engine {
    fn add_reporter(&mut self, reporter: Arc<dyn Reporter>);

    fn reporter_attached(&self) -> bool;

    fn mark_reporter_attached(&mut self);

    /// Instance-scoped option overrides. Merged over constructor options at
    /// attach time, key by key.
    fn runtimes_options(&self) -> Option<Options> {
        None
    }
}
