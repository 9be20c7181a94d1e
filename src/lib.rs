//! # Merger
//!
//! `merger` bundles the text files of a set of files and directories into a
//! single output file. Every file is written as a block: a header line naming
//! its path relative to the working directory, the file's bytes verbatim, and
//! two newlines of padding.
//!
//! ```text
//! ==== notes/todo.md ====
//! <contents of notes/todo.md>
//!
//! ```
//!
//! Directories are walked depth-first in file-name order. A file is merged
//! only when its first 1024 bytes look like text (see [`looks_like_text`]).
//! Unreadable inputs, subdirectories and files are reported as warnings, both
//! through `tracing` and in the returned [`MergeReport`], and never abort the
//! run. A run fails when nothing is found or the output cannot be written.
//!
//! # Example
//!
//! ```no_run
//! use merger::{MergeBuilder, TextDetection, merge, normalize_inputs};
//!
//! let inputs = normalize_inputs(["notes.txt", "docs/", "src/file.md"]);
//! let options = MergeBuilder::new("out.txt")
//!     .detection(TextDetection::Heuristic)
//!     .ignore_patterns(vec!["*.lock".into()])
//!     .build();
//!
//! let report = merge(&inputs, &options).expect("merge failed");
//! for file in &report.files {
//!     println!("{} ({} bytes)", file.display_path, file.bytes);
//! }
//! ```

mod classify;
mod collect;
mod engine;
mod error;
mod inputs;
mod options;
pub mod output;
mod types;

pub use classify::{MAX_CONTROL_RATIO, PROBE_LEN, is_text_file, looks_like_text};
pub use collect::{Collector, collect_text_files};
pub use engine::{merge, merge_into, merge_paths};
pub use error::MergeError;
pub use inputs::normalize_inputs;
pub use options::{MergeBuilder, MergeOptions, TextDetection};
pub use types::{Collection, MergeReport, MergeWarning, MergedFile, WarningKind};
