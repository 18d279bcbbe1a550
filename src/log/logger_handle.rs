use std::sync::Arc;

use crate::log::{
    log_level::LogLevel, log_sink::LogSink, logger::Logger, sink_error::SinkError,
};

/// Lightweight, cloneable handle to a configured [`Logger`].
///
/// All clones share the same sinks and threshold. Calls to
/// [`log`](Self::log) are synchronous: by the time it returns, the rendered
/// line has been handed to every sink.
///
/// # Examples
/// ```ignore
/// // Usually you obtain it via: let handle = registry.initialize("weather_checker", "weather.log")?;
/// handle.log(LogLevel::Info, "Starting weather check...")?;
/// ```
#[derive(Clone)]
pub struct LoggerHandle {
    inner: Arc<Logger>,
}

impl LoggerHandle {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(logger),
        }
    }

    /// Emits `message` at `level` to every attached sink.
    ///
    /// # Errors
    /// Returns the first [`SinkError`] raised by a sink. The error is never
    /// swallowed here; callers decide whether it is fatal.
    pub fn log(&self, level: LogLevel, message: &str) -> Result<(), SinkError> {
        self.inner.log(level, message)
    }

    pub fn attach(&self, sink: Arc<dyn LogSink>) {
        self.inner.attach(sink);
    }

    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.inner
    }

    /// True when both handles point at the same logger instance.
    #[must_use]
    pub fn same_logger(&self, other: &LoggerHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
