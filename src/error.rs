use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("stat error for path {path}: {source}")]
    Path {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("read dir error for {path}: {}", walk_cause(.source))]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("failed to create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write merged output: {0}")]
    Sink(#[source] std::io::Error),
    #[error("no textual files found in input paths")]
    NothingToMerge,
}
impl MergeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }
    /// Whether the error aborts a whole run rather than a single input or file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MergeError::CreateOutput { .. }
                | MergeError::Sink(_)
                | MergeError::NothingToMerge
                | MergeError::InvalidPattern(_)
        )
    }
}

fn walk_cause(err: &ignore::Error) -> String {
    match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}
