use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::log::{log_sink::LogSink, sink_error::SinkError};

/// Writes each line to standard output (or an injected stream).
///
/// Writes are synchronous and flushed per line. Beyond that no buffering
/// guarantee is made; stdout behaves as the platform defines.
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Uses `out` in place of stdout. Handy for capturing console output.
    #[must_use]
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl LogSink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        // A panic elsewhere while holding the lock does not corrupt a stream.
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{line}")
            .and_then(|()| out.flush())
            .map_err(|source| SinkError::Write {
                sink: self.name().to_owned(),
                source,
            })
    }

    fn name(&self) -> &str {
        "console"
    }
}
