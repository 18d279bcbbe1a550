use std::sync::{Arc, PoisonError, RwLock};

use crate::log::{
    log_level::LogLevel, log_record::LogRecord, log_sink::LogSink, sink_error::SinkError,
};

struct LoggerState {
    threshold: LogLevel,
    sinks: Vec<Arc<dyn LogSink>>,
}

/// Synchronous fan-out logger.
///
/// A `Logger` owns an ordered list of sinks and a minimum severity. Every
/// record at or above the threshold is rendered once and written to every
/// sink in registration order before [`log`](Self::log) returns.
///
/// Sinks are normally attached once, during
/// [`LoggerRegistry::initialize`](crate::log::registry::LoggerRegistry::initialize),
/// and only read afterwards.
pub struct Logger {
    name: String,
    state: RwLock<LoggerState>,
}

impl Logger {
    /// Creates a logger with no sinks.
    #[must_use]
    pub fn new(name: impl Into<String>, threshold: LogLevel) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(LoggerState {
                threshold,
                sinks: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .threshold
    }

    pub fn set_threshold(&self, level: LogLevel) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .threshold = level;
    }

    /// Appends `sink` after the ones already registered.
    pub fn attach(&self, sink: Arc<dyn LogSink>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sinks
            .push(sink);
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sinks
            .len()
    }

    /// Renders `message` and writes it to every sink.
    ///
    /// Records below the threshold are dropped and `Ok(())` is returned.
    ///
    /// # Errors
    /// Every sink is attempted even if an earlier one fails; the first
    /// [`SinkError`] encountered is returned.
    pub fn log(&self, level: LogLevel, message: &str) -> Result<(), SinkError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if level < state.threshold {
            return Ok(());
        }

        let line = LogRecord::new(level, message).render();

        let mut first_err = None;
        for sink in &state.sinks {
            if let Err(e) = sink.write_line(&line) {
                first_err.get_or_insert(e);
            }
        }

        first_err.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::{io, sync::Mutex};

    #[derive(Default)]
    struct MemorySink {
        label: &'static str,
        lines: Mutex<Vec<String>>,
    }

    impl MemorySink {
        fn named(label: &'static str) -> Self {
            Self {
                label,
                lines: Mutex::new(Vec::new()),
            }
        }

        fn lines(&self) -> Vec<String> {
            self.lines.lock().expect("memory sink lock").clone()
        }
    }

    impl LogSink for MemorySink {
        fn write_line(&self, line: &str) -> Result<(), SinkError> {
            self.lines
                .lock()
                .expect("memory sink lock")
                .push(format!("{}:{line}", self.label));
            Ok(())
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    struct FailingSink;

    impl LogSink for FailingSink {
        fn write_line(&self, _line: &str) -> Result<(), SinkError> {
            Err(SinkError::Write {
                sink: "failing".into(),
                source: io::Error::other("disk full"),
            })
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn records_below_threshold_are_dropped() {
        let logger = Logger::new("t", LogLevel::Info);
        let sink = Arc::new(MemorySink::named("m"));
        logger.attach(sink.clone());

        logger.log(LogLevel::Debug, "hidden").expect("log");
        logger.log(LogLevel::Info, "shown").expect("log");
        logger.log(LogLevel::Critical, "loud").expect("log");

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] shown"));
        assert!(lines[1].ends_with("[CRITICAL] loud"));
    }

    #[test]
    fn dispatch_follows_registration_order() {
        let logger = Logger::new("t", LogLevel::Debug);
        let shared = Arc::new(MemorySink::named("shared"));
        logger.attach(shared.clone());
        logger.attach(shared.clone());

        logger.log(LogLevel::Info, "hello").expect("log");

        let lines = shared.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1], "both sinks see the same rendered text");
    }

    #[test]
    fn failing_sink_does_not_starve_the_others() {
        let logger = Logger::new("t", LogLevel::Info);
        let good = Arc::new(MemorySink::named("good"));
        logger.attach(Arc::new(FailingSink));
        logger.attach(good.clone());

        let err = logger.log(LogLevel::Info, "still delivered").unwrap_err();
        assert_eq!(err.target(), "failing");
        assert_eq!(good.lines().len(), 1);
    }

    #[test]
    fn threshold_can_be_raised() {
        let logger = Logger::new("t", LogLevel::Info);
        let sink = Arc::new(MemorySink::named("m"));
        logger.attach(sink.clone());

        logger.set_threshold(LogLevel::Error);
        logger.log(LogLevel::Warning, "quiet").expect("log");

        assert_eq!(logger.threshold(), LogLevel::Error);
        assert!(sink.lines().is_empty());
    }
}
