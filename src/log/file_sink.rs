use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::log::{log_sink::LogSink, sink_error::SinkError};

/// Appends lines to a UTF-8 text file.
///
/// The file is created if missing and never truncated, so repeated runs
/// accumulate history. Every line is written and flushed before `write_line`
/// returns. That hands the bytes to the OS; it does not `fsync`.
/// There is no rotation or size limit.
pub struct FileSink {
    label: String,
    file: Mutex<File>,
}

impl FileSink {
    /// Opens `path` in append mode.
    ///
    /// # Errors
    /// Returns [`SinkError::Open`] if the file cannot be created or opened
    /// (missing parent directory, permissions, path is a directory...).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            label: format!("file {}", path.display()),
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);

        // One write call per line keeps concurrent appenders from interleaving
        // inside a line.
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        file.write_all(buf.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| SinkError::Write {
                sink: self.label.clone(),
                source,
            })
    }

    fn name(&self) -> &str {
        &self.label
    }
}
