/// Error types for report generation
///
/// Every failure surfaces to the caller with enough context to explain
/// which collaborator (context, input, sink) was at fault. Nothing is retried.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The "show labels" flag could not be read from the report context
    #[error("failed to get {key} flag from context: {message}")]
    Context { key: String, message: String },

    /// The output sink could not be opened
    #[error("failed to open output {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Findings could not be read or parsed
    #[error("failed to load findings from {path}: {message}")]
    Input { path: String, message: String },

    /// The sink rejected a write or flush
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Io(io::Error::from(e))
    }
}
