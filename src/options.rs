use crate::render::{DurationFormat, NameFormat, TimeFormat};
use crate::writer::Sink;
use std::sync::Arc;

/// Constructor-time configuration. Every field is optional; whatever is left
/// unset falls back to the engine's instance-scoped bag and then to the
/// built-in defaults (colors on, STDERR).
#[derive(Clone, Default)]
pub struct Options {
    pub colors: Option<bool>,
    pub stream: Option<Sink>,
    pub display_name: Option<Arc<dyn NameFormat>>,
    pub display_time: Option<Arc<dyn TimeFormat>>,
    pub display_duration: Option<Arc<dyn DurationFormat>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    pub fn stream(mut self, sink: Sink) -> Self {
        self.stream = Some(sink);
        self
    }

    pub fn display_name<F>(mut self, format: F) -> Self
    where
        F: NameFormat + 'static,
    {
        self.display_name = Some(Arc::new(format));
        self
    }

    pub fn display_time<F>(mut self, format: F) -> Self
    where
        F: TimeFormat + 'static,
    {
        self.display_time = Some(Arc::new(format));
        self
    }

    pub fn display_duration<F>(mut self, format: F) -> Self
    where
        F: DurationFormat + 'static,
    {
        self.display_duration = Some(Arc::new(format));
        self
    }
}

/// The merged configuration one attachment lives with. Immutable once built.
#[derive(Clone)]
pub struct ResolvedOptions {
    pub colors: bool,
    pub stream: Sink,
    pub display_name: Option<Arc<dyn NameFormat>>,
    pub display_time: Option<Arc<dyn TimeFormat>>,
    pub display_duration: Option<Arc<dyn DurationFormat>>,
}

/// Shallow key-by-key merge: the engine's instance-scoped bag wins over
/// constructor options, defaults fill the rest. Pure, runs once per attach.
pub fn resolve(options: &Options, scoped: Option<Options>) -> ResolvedOptions {
    let scoped = scoped.unwrap_or_default();
    ResolvedOptions {
        colors: scoped.colors.or(options.colors).unwrap_or(true),
        stream: scoped
            .stream
            .or_else(|| options.stream.clone())
            .unwrap_or(Sink::Stderr),
        display_name: scoped
            .display_name
            .or_else(|| options.display_name.clone()),
        display_time: scoped
            .display_time
            .or_else(|| options.display_time.clone()),
        display_duration: scoped
            .display_duration
            .or_else(|| options.display_duration.clone()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let resolved = resolve(&Options::new(), None);
        assert_equal!(resolved.colors, true);
        assert!(matches!(resolved.stream, Sink::Stderr));
        assert!(resolved.display_name.is_none());
        assert!(resolved.display_time.is_none());
        assert!(resolved.display_duration.is_none());
    }

    #[test]
    fn constructor_options_beat_defaults() {
        let resolved = resolve(&Options::new().colors(false).stream(Sink::Stdout), None);
        assert_equal!(resolved.colors, false);
        assert!(matches!(resolved.stream, Sink::Stdout));
    }

    #[test]
    fn engine_scoped_options_beat_constructor_options() {
        let scoped = Options::new().colors(true);
        let resolved = resolve(
            &Options::new().colors(false).stream(Sink::Stdout),
            Some(scoped),
        );
        assert_equal!(resolved.colors, true);
        // keys the scoped bag leaves unset still come from the constructor
        assert!(matches!(resolved.stream, Sink::Stdout));
    }
}
