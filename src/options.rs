use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// How candidate files are classified as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextDetection {
    /// Zero-byte, UTF-8 and control-ratio checks on the first 1024 bytes.
    #[default]
    Heuristic,
    /// `content_inspector` on the same probe.
    Inspector,
    /// Every regular file is text.
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOptions {
    pub output: PathBuf,
    pub detection: TextDetection,
    /// Header paths are made relative to this directory instead of the
    /// current working directory.
    pub display_base: Option<PathBuf>,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
}
impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("out.txt"),
            detection: TextDetection::Heuristic,
            display_base: None,
            respect_gitignore: false,
            max_depth: None,
            include_hidden: true,
            follow_links: false,
            ignore_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct MergeBuilder {
    options: MergeOptions,
}
impl MergeBuilder {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            options: MergeOptions {
                output: output.into(),
                ..Default::default()
            },
        }
    }
    pub fn detection(mut self, method: TextDetection) -> Self {
        self.options.detection = method;
        self
    }
    pub fn display_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.options.display_base = Some(base.into());
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> MergeOptions {
        self.options
    }
}
