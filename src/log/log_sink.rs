use crate::log::sink_error::SinkError;

/// A destination for rendered log lines.
///
/// `line` never carries a trailing newline; each sink terminates it.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<(), SinkError>;

    /// Short description used in error messages.
    fn name(&self) -> &str;
}
