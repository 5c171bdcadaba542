use crate::options::ResolvedOptions;
use chrono::prelude::*;
use chrono::{DateTime, Local};
use std::time::{Duration, SystemTime};

/// Palette for the built-in renderers. Every color decision goes through
/// [`paint`] keyed by one of these, so turning colors off is a single branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Name,
    Muted,
    Duration,
    Start,
    Finish,
    Fail,
}

/// With colors off this is the identity function: the returned string is
/// byte-identical to the input, no escape sequences anywhere.
pub fn paint(tint: Tint, text: &str, colors: bool) -> String {
    if !colors {
        return text.to_string();
    }
    use colored::Colorize;
    let painted = match tint {
        Tint::Name => text.cyan(),
        Tint::Muted => text.dimmed(),
        Tint::Duration => text.magenta(),
        Tint::Start => text.green(),
        Tint::Finish => text.yellow(),
        Tint::Fail => text.red(),
    };
    painted.to_string()
}

/// Renders a task or build name. Callers may substitute their own
/// implementation through [`crate::Options::display_name`]; closures and
/// plain functions with the same shape work directly.
pub trait NameFormat: Send + Sync {
    fn format(&self, name: &str, options: &ResolvedOptions) -> String;
}

/// Renders an event timestamp.
pub trait TimeFormat: Send + Sync {
    fn format(&self, timestamp: SystemTime, options: &ResolvedOptions) -> String;
}

/// Renders a run's elapsed time.
pub trait DurationFormat: Send + Sync {
    fn format(&self, elapsed: Duration, options: &ResolvedOptions) -> String;
}

impl<F> NameFormat for F
where
    F: Fn(&str, &ResolvedOptions) -> String + Send + Sync,
{
    fn format(&self, name: &str, options: &ResolvedOptions) -> String {
        self(name, options)
    }
}

impl<F> TimeFormat for F
where
    F: Fn(SystemTime, &ResolvedOptions) -> String + Send + Sync,
{
    fn format(&self, timestamp: SystemTime, options: &ResolvedOptions) -> String {
        self(timestamp, options)
    }
}

impl<F> DurationFormat for F
where
    F: Fn(Duration, &ResolvedOptions) -> String + Send + Sync,
{
    fn format(&self, elapsed: Duration, options: &ResolvedOptions) -> String {
        self(elapsed, options)
    }
}

pub struct DefaultNameFormat;

impl NameFormat for DefaultNameFormat {
    fn format(&self, name: &str, options: &ResolvedOptions) -> String {
        paint(Tint::Name, name, options.colors)
    }
}

pub struct DefaultTimeFormat;

impl TimeFormat for DefaultTimeFormat {
    fn format(&self, timestamp: SystemTime, options: &ResolvedOptions) -> String {
        paint(Tint::Muted, &clock_time(timestamp), options.colors)
    }
}

pub struct DefaultDurationFormat;

impl DurationFormat for DefaultDurationFormat {
    fn format(&self, elapsed: Duration, options: &ResolvedOptions) -> String {
        paint(Tint::Duration, &human_duration(elapsed), options.colors)
    }
}

/// A caller-supplied formatter wins; coloring its result is its own
/// business. Otherwise the built-in default applies.
pub fn name(value: &str, options: &ResolvedOptions) -> String {
    match &options.display_name {
        Some(custom) => custom.format(value, options),
        None => DefaultNameFormat.format(value, options),
    }
}

pub fn time(timestamp: SystemTime, options: &ResolvedOptions) -> String {
    match &options.display_time {
        Some(custom) => custom.format(timestamp, options),
        None => DefaultTimeFormat.format(timestamp, options),
    }
}

pub fn duration(elapsed: Duration, options: &ResolvedOptions) -> String {
    match &options.display_duration {
        Some(custom) => custom.format(elapsed, options),
        None => DefaultDurationFormat.format(elapsed, options),
    }
}

/// Local wall-clock time with millisecond precision, e.g. `10:00:02.500`.
pub fn clock_time(timestamp: SystemTime) -> String {
    let datetime: DateTime<Local> = timestamp.into();
    datetime.format("%H:%M:%S%.3f").to_string()
}

/// Humanized elapsed time: `450ms`, `2.5s`, `1m 30s`, `2h 5m`. Fractions of
/// a second are rounded to two decimals and trailing zeros are dropped.
pub fn human_duration(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1000 {
        return format!("{}ms", millis);
    }
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        return format!("{}s", (secs * 100.0).round() / 100.0);
    }
    let mins = elapsed.as_secs() / 60;
    let rem_secs = elapsed.as_secs() % 60;
    if mins < 60 {
        if rem_secs == 0 {
            return format!("{}m", mins);
        }
        return format!("{}m {}s", mins, rem_secs);
    }
    let hours = mins / 60;
    let rem_mins = mins % 60;
    if rem_mins == 0 {
        return format!("{}h", hours);
    }
    format!("{}h {}m", hours, rem_mins)
}
