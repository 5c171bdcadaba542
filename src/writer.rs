use std::io;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Where status lines go. STDERR is the default so whatever the tasks
/// themselves print on STDOUT can still be piped into a file cleanly.
#[derive(Clone)]
pub enum Sink {
    Stderr,
    Stdout,
    Custom(Arc<Mutex<dyn Write + Send>>),
}

impl Sink {
    pub fn custom<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Sink::Custom(Arc::new(Mutex::new(writer)))
    }

    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stderr => {
                let mut stderr = io::stderr();
                stderr.write_all(line)?;
                stderr.flush()
            }
            Sink::Stdout => {
                let mut stdout = io::stdout();
                stdout.write_all(line)?;
                stdout.flush()
            }
            Sink::Custom(writer) => {
                let mut writer = writer.lock().expect("poisoned lock");
                writer.write_all(line)?;
                writer.flush()
            }
        }
    }
}

/// Joins rendered fields into one line and pushes it to the sink right away.
/// No buffering, no batching, no retry.
pub struct Writer {
    sink: Sink,
}

impl Writer {
    pub fn new(sink: Sink) -> Self {
        Writer { sink }
    }

    /// Single space between fields, trailing newline, one synchronous write.
    /// A failed write reports to the caller and leaves the writer usable.
    pub fn writeln(&self, fields: &[String]) -> io::Result<()> {
        let mut line = fields.join(" ");
        line.push('\n');
        self.sink.write_line(line.as_bytes())
    }
}

// Capture sink that collects everything into a string it owns, so output
// can later be inspected/dumped.
#[derive(Clone)]
pub struct StringSink {
    output: Arc<Mutex<String>>,
}

impl StringSink {
    pub fn new() -> Self {
        Self {
            output: Arc::new(Mutex::new(String::new())),
        }
    }
}

impl Write for StringSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = std::str::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.output.lock().expect("poisoned lock").push_str(chunk);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<StringSink> for Sink {
    fn from(sink: StringSink) -> Self {
        Sink::custom(sink)
    }
}

impl std::fmt::Display for StringSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.output.lock().expect("poisoned lock");
        write!(f, "{}", &s)
    }
}

pub fn strip_ansi(s: &str) -> String {
    String::from_utf8(
        strip_ansi_escapes::strip(s).expect("Cant strip ANSI escape characters from a string"),
    )
    .expect("not a utf8 string")
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal;

    #[test]
    fn writeln_joins_fields_with_spaces_and_a_newline() {
        let sink = StringSink::new();
        let writer = Writer::new(sink.clone().into());
        writer.writeln(&["a".to_string(), "b".to_string()]).unwrap();
        writer.writeln(&["c".to_string()]).unwrap();
        assert_equal!(sink.to_string(), "a b\nc\n");
    }

    #[test]
    fn empty_fields_keep_their_separator() {
        let sink = StringSink::new();
        let writer = Writer::new(sink.clone().into());
        writer
            .writeln(&["ERROR".to_string(), String::new(), "boom".to_string()])
            .unwrap();
        assert_equal!(sink.to_string(), "ERROR  boom\n");
    }

    #[test]
    fn strip_ansi_removes_escape_sequences() {
        assert_equal!(strip_ansi("\u{1b}[36mbuild\u{1b}[0m"), "build");
    }
}
