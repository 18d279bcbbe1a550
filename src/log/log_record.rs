use chrono::{DateTime, Local};

use crate::log::log_level::LogLevel;

/// Timestamp layout shared by every sink: `2025-11-02 02:30:45,123`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Represents a single log event.
///
/// A record is created at the emission point, rendered once by the
/// [`Logger`](crate::log::logger::Logger) and then dropped. Sinks only ever
/// see the rendered text, so every sink receives byte-identical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// The severity level of the record.
    pub level: LogLevel,
    /// Local wall-clock time at which the record was created.
    pub timestamp: DateTime<Local>,
    /// The message payload, rendered verbatim.
    pub message: String,
}

impl LogRecord {
    /// Creates a record stamped with the current local time.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use crate::log::{log_level::LogLevel, log_record::LogRecord};
    ///
    /// let rec = LogRecord::new(LogLevel::Info, "Starting weather check...");
    /// ```
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(level, message, Local::now())
    }

    /// Creates a record with an explicit timestamp.
    pub fn at(level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            level,
            timestamp,
            message: message.into(),
        }
    }

    /// Renders `<timestamp> [<LEVEL>] <message>` without a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{} [{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level.as_str(),
            self.message
        )
    }
}
