/*!
# runtimes

Runtime status reporting for task-orchestration engines. Attach it to an
engine and every task lifecycle event becomes one human-readable line on a
stream: a line when a task starts, another when it finishes (with elapsed
time) or errors.

The engine stays in charge of scheduling and running tasks; this crate only
listens. Attachment is idempotent per engine instance. Output goes to STDERR
by default so task output on STDOUT can still be piped into a file cleanly.
Colors can be switched off, and each rendered field (name, clock time,
duration) can be replaced with a caller-supplied formatter.

```
use runtimes::{attach, Engine, Options, Reporter, Run, StringSink, Task};
use std::sync::Arc;
use std::time::SystemTime;

struct Pipeline {
    reporters: Vec<Arc<dyn Reporter>>,
    reporter_attached: bool,
}

impl Engine for Pipeline {
    fn add_reporter(&mut self, reporter: Arc<dyn Reporter>) {
        self.reporters.push(reporter);
    }
    fn reporter_attached(&self) -> bool {
        self.reporter_attached
    }
    fn mark_reporter_attached(&mut self) {
        self.reporter_attached = true;
    }
}

let output = StringSink::new();
let mut pipeline = Pipeline { reporters: vec![], reporter_attached: false };
attach(
    &mut pipeline,
    &Options::new().colors(false).stream(output.clone().into()),
);

let task = Task::new("assets");
let mut run = Run::started(SystemTime::now());
for reporter in &pipeline.reporters {
    reporter.task_starting(&task, &run).unwrap();
}
run.finish(SystemTime::now());
for reporter in &pipeline.reporters {
    reporter.task_finished(&task, &run).unwrap();
}
assert!(output.to_string().contains("starting assets"));
```
*/
#![allow(clippy::new_without_default)]

pub mod engine;
pub mod options;
pub mod render;
pub mod reporter;
pub mod writer;

pub use engine::{Engine, Run, Task};
pub use options::{Options, ResolvedOptions};
pub use render::{DurationFormat, NameFormat, TimeFormat};
pub use reporter::{Reporter, RuntimeReporter};
pub use writer::{Sink, StringSink, Writer};

use std::sync::Arc;

/// Builds an installer for one options record. The installer can be applied
/// to any number of engine instances; each instance is attached at most once.
pub fn runtimes(options: Options) -> impl Fn(&mut dyn Engine) {
    move |engine| attach(engine, &options)
}

/// Attaches the reporter to an engine instance. A second call on the same
/// instance is a silent no-op: the flag is checked before anything else, so
/// nothing gets re-resolved or re-registered.
pub fn attach(engine: &mut dyn Engine, options: &Options) {
    if engine.reporter_attached() {
        return;
    }
    engine.mark_reporter_attached();
    let resolved = options::resolve(options, engine.runtimes_options());
    engine.add_reporter(Arc::new(RuntimeReporter::new(resolved)));
}
