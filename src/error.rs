//! Errors raised at the output boundary

use std::io;

use thiserror::Error;

/// Failure while emitting the structure report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report line: {0}")]
    Write(#[from] io::Error),
}

impl ReportError {
    /// True when the reader on the other end of the stream went away
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            ReportError::Write(err) => err.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}
