use std::{fmt, io, path::PathBuf};

/// A sink target could not be opened or written.
///
/// Both variants describe the same failure kind from the caller's point of
/// view: the destination is unavailable. `Open` happens while a logger is
/// being initialized, `Write` on any later call to `log`. A failed write may
/// leave that single line missing or truncated.
#[derive(Debug)]
pub enum SinkError {
    Open { path: PathBuf, source: io::Error },
    Write { sink: String, source: io::Error },
}

impl SinkError {
    /// Name of the sink or file path that failed.
    #[must_use]
    pub fn target(&self) -> String {
        match self {
            SinkError::Open { path, .. } => path.display().to_string(),
            SinkError::Write { sink, .. } => sink.clone(),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Open { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            SinkError::Write { sink, source } => write!(f, "cannot write to {sink}: {source}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Open { source, .. } | SinkError::Write { source, .. } => Some(source),
        }
    }
}
