use crate::classify::is_text_file;
use crate::error::MergeError;
use crate::options::{MergeOptions, TextDetection};
use crate::types::{Collection, MergeWarning, WarningKind};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Finds the text files under an input path.
///
/// Directories are walked depth-first in file-name order. A subdirectory that
/// cannot be read is reported as a warning and its siblings are still walked.
#[derive(Debug, Clone)]
pub struct Collector {
    detection: TextDetection,
    respect_gitignore: bool,
    include_hidden: bool,
    follow_links: bool,
    max_depth: Option<usize>,
    matcher: Option<GlobSet>,
}

impl Collector {
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidPattern`] if an ignore pattern is not a
    /// valid glob.
    pub fn new(options: &MergeOptions) -> Result<Self, MergeError> {
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut glob_builder = GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = Glob::new(pattern).map_err(|e| {
                    MergeError::InvalidPattern(format!("'{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            Some(glob_builder.build().map_err(|e| {
                MergeError::InvalidPattern(format!("failed to build glob set: {}", e))
            })?)
        } else {
            None
        };
        Ok(Self {
            detection: options.detection,
            respect_gitignore: options.respect_gitignore,
            include_hidden: options.include_hidden,
            follow_links: options.follow_links,
            max_depth: options.max_depth,
            matcher,
        })
    }

    /// Collects the text files at or under `path`.
    ///
    /// # Errors
    ///
    /// [`MergeError::Path`] if `path` cannot be stat'ed and
    /// [`MergeError::Walk`] if `path` is a directory that cannot be listed.
    pub fn collect(&self, path: &Path) -> Result<Collection, MergeError> {
        let metadata = fs::metadata(path).map_err(|e| MergeError::Path {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut collection = Collection::default();
        if metadata.is_dir() {
            self.walk(path, &mut collection)?;
        } else {
            self.consider(path, &mut collection);
        }
        Ok(collection)
    }

    fn walk(&self, root: &Path, collection: &mut Collection) -> Result<(), MergeError> {
        for result in self.walk_builder(root).build() {
            match result {
                Ok(entry) => {
                    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                    if !is_dir {
                        self.consider(entry.path(), collection);
                    }
                }
                Err(err) => {
                    let path = error_path(&err).map(Path::to_path_buf);
                    if path.as_deref() == Some(root) {
                        return Err(MergeError::Walk {
                            path: root.to_path_buf(),
                            source: err,
                        });
                    }
                    let path = path.unwrap_or_else(|| root.to_path_buf());
                    warn!("Skipping subdir {}: {}", path.display(), err);
                    collection.warnings.push(MergeWarning::new(
                        path,
                        err.to_string(),
                        WarningKind::UnreadableDirectory,
                    ));
                }
            }
        }
        Ok(())
    }

    fn walk_builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(!self.include_hidden)
            .parents(self.respect_gitignore)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .ignore(false)
            .max_depth(self.max_depth)
            .follow_links(self.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if let Some(ref matcher) = self.matcher {
            let matcher = matcher.clone();
            let root = root.to_path_buf();
            builder.filter_entry(move |entry| {
                entry.path() == root || !matcher.is_match(entry.path())
            });
        }
        builder
    }

    fn consider(&self, path: &Path, collection: &mut Collection) {
        if path_is_ignored(self.matcher.as_ref(), path) {
            return;
        }
        match is_text_file(path, self.detection) {
            Ok(true) => collection.files.push(path.to_path_buf()),
            Ok(false) => debug!("Skipping non-text file: {}", path.display()),
            Err(err) => {
                warn!("Cannot classify {}: {}", path.display(), err);
                collection.warnings.push(MergeWarning::new(
                    path,
                    err.to_string(),
                    WarningKind::Unclassifiable,
                ));
            }
        }
    }
}

fn path_is_ignored(matcher: Option<&GlobSet>, path: &Path) -> bool {
    matcher.is_some_and(|m| m.is_match(path))
}

/// Digs the offending path out of a walk error.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

/// Convenience wrapper collecting with default options.
pub fn collect_text_files(path: impl AsRef<Path>) -> Result<Vec<PathBuf>, MergeError> {
    let collector = Collector::new(&MergeOptions::default())?;
    Ok(collector.collect(path.as_ref())?.files)
}
