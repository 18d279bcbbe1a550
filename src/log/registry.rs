use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use crate::log::{
    console_sink::ConsoleSink, file_sink::FileSink, log_level::LogLevel, logger::Logger,
    logger_handle::LoggerHandle, sink_error::SinkError,
};

/// Caller-owned set of named loggers.
///
/// Inside one registry, a name always maps to the same [`Logger`]; asking
/// for it again hands back another handle to that instance. The registry is
/// created once at process start and passed to whoever needs a logger, in
/// place of a hidden global.
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Registered>>,
}

/// Which of the standard sinks a registered logger already carries.
struct Registered {
    handle: LoggerHandle,
    console_attached: bool,
    file_attached: bool,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds (or retrieves) the logger `name`, wired to the console and to
    /// an append-mode file at `file_path`.
    ///
    /// The threshold is set to [`LogLevel::Info`]. Each sink is attached at
    /// most once per logger, so calling this again with the same name does
    /// not duplicate output. The whole call runs under the registry lock;
    /// concurrent callers cannot attach twice.
    ///
    /// The console sink is attached before the file is opened. If opening
    /// fails, the logger keeps its console sink and can be fetched with
    /// [`get`](Self::get) to report the failure. A later call retries the
    /// file, and keeps failing until it can be opened.
    ///
    /// # Errors
    /// Returns [`SinkError::Open`] when `file_path` cannot be opened for
    /// appending.
    pub fn initialize<P: AsRef<Path>>(
        &self,
        name: &str,
        file_path: P,
    ) -> Result<LoggerHandle, SinkError> {
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);

        let entry = loggers
            .entry(name.to_owned())
            .or_insert_with(|| Registered {
                handle: LoggerHandle::new(Logger::new(name, LogLevel::Info)),
                console_attached: false,
                file_attached: false,
            });

        let logger = entry.handle.logger();
        logger.set_threshold(LogLevel::Info);

        if !entry.console_attached {
            logger.attach(Arc::new(ConsoleSink::stdout()));
            entry.console_attached = true;
        }
        if !entry.file_attached {
            logger.attach(Arc::new(FileSink::open(file_path)?));
            entry.file_attached = true;
        }

        Ok(entry.handle.clone())
    }

    /// Returns the logger registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<LoggerHandle> {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(|entry| entry.handle.clone())
    }
}
