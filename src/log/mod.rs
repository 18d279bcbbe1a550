pub mod console_sink;
pub mod file_sink;
pub mod log_level;
pub mod log_macros;
pub mod log_record;
pub mod log_sink;
pub mod logger;
pub mod logger_handle;
pub mod noop_log_sink;
pub mod registry;
pub mod sink_error;
pub use log_level::LogLevel;
pub use logger_handle::LoggerHandle;
pub use noop_log_sink::NoopLogSink;
pub use registry::LoggerRegistry;
pub use sink_error::SinkError;
