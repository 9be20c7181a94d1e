use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One header block written to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedFile {
    /// The path the content was read from.
    pub path: PathBuf,
    /// The path as written into the header line.
    pub display_path: String,
    /// Bytes of content copied after the header (padding excluded).
    pub bytes: u64,
    /// `false` when the file could not be opened or a read failed part way.
    pub complete: bool,
}

/// Kind of merge warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// An input path was skipped entirely.
    SkippedInput,
    /// A subdirectory could not be listed.
    UnreadableDirectory,
    /// A candidate could not be probed and was left out.
    Unclassifiable,
    /// A collected file could not be opened or read while merging.
    ReadFailed,
    /// A collected file turned out to have no content.
    EmptyFile,
    /// The output file was found among the inputs and left out.
    OutputExcluded,
}

/// Non-fatal problem encountered during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeWarning {
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    pub kind: WarningKind,
}

impl MergeWarning {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }
}

/// Text files found under one input path.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Collection {
    /// Accepted files in depth-first, name-ordered traversal order.
    pub files: Vec<PathBuf>,
    pub warnings: Vec<MergeWarning>,
}

/// The outcome of a successful merge run.
#[derive(Debug, Serialize, Deserialize)]
pub struct MergeReport {
    /// The file that was written.
    pub output: PathBuf,
    /// Every block written, in output order.
    pub files: Vec<MergedFile>,
    /// Warnings from collection and merging, in the order they occurred.
    pub warnings: Vec<MergeWarning>,
}

impl MergeReport {
    /// Total content bytes copied, padding and headers excluded.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}
