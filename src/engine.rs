use crate::collect::Collector;
use crate::error::MergeError;
use crate::options::MergeOptions;
use crate::output::{PADDING, display_path, header_line, stream_into};
use crate::types::{MergeReport, MergeWarning, MergedFile, WarningKind};
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Merges the text files found under `inputs` into `options.output`.
///
/// Inputs that cannot be collected, and files that cannot be read while
/// merging, are reported in [`MergeReport::warnings`] without failing the
/// run. The output file is only created once at least one text file has been
/// found.
///
/// # Errors
///
/// [`MergeError::NothingToMerge`] when no input yields a text file,
/// [`MergeError::CreateOutput`] when the output cannot be created,
/// [`MergeError::Sink`] when writing it fails and
/// [`MergeError::InvalidPattern`] for a bad ignore pattern.
pub fn merge(inputs: &[PathBuf], options: &MergeOptions) -> Result<MergeReport, MergeError> {
    let collector = Collector::new(options)?;
    let mut warnings = Vec::new();
    let mut files = Vec::new();
    for input in inputs {
        match collector.collect(input) {
            Ok(collection) => {
                files.extend(collection.files);
                warnings.extend(collection.warnings);
            }
            Err(err) => {
                warn!("Skipping {}: {}", input.display(), err);
                warnings.push(MergeWarning::new(
                    input,
                    err.to_string(),
                    WarningKind::SkippedInput,
                ));
            }
        }
    }
    exclude_output(&mut files, &options.output, &mut warnings);
    if files.is_empty() {
        return Err(MergeError::NothingToMerge);
    }

    let file = File::create(&options.output).map_err(|e| MergeError::CreateOutput {
        path: options.output.clone(),
        source: e,
    })?;
    info!("Output file: {}", options.output.display());
    let mut out = BufWriter::new(file);
    let base = match &options.display_base {
        Some(base) => Some(base.clone()),
        None => env::current_dir().ok(),
    };
    let merged = merge_into(&mut out, &files, base.as_deref(), &mut warnings)?;
    out.flush().map_err(MergeError::Sink)?;
    info!("Done.");

    Ok(MergeReport {
        output: options.output.clone(),
        files: merged,
        warnings,
    })
}

/// Merges `inputs` into `output` with default options.
pub fn merge_paths(
    inputs: &[PathBuf],
    output: impl Into<PathBuf>,
) -> Result<MergeReport, MergeError> {
    let options = MergeOptions {
        output: output.into(),
        ..Default::default()
    };
    merge(inputs, &options)
}

/// Writes one block per file into `dst`, in order.
///
/// Header paths are relative to `base` when given. Files that cannot be read
/// still get their header and padding; the failure is pushed onto `warnings`.
///
/// # Errors
///
/// Only [`MergeError::Sink`], when writing to `dst` fails.
pub fn merge_into<W: Write + ?Sized>(
    dst: &mut W,
    files: &[PathBuf],
    base: Option<&Path>,
    warnings: &mut Vec<MergeWarning>,
) -> Result<Vec<MergedFile>, MergeError> {
    let mut merged = Vec::with_capacity(files.len());
    for path in files {
        let shown = display_path(path, base);
        info!("Merging: {}", shown);
        dst.write_all(header_line(&shown).as_bytes())
            .map_err(MergeError::Sink)?;

        let mut bytes = 0;
        let complete = match stream_into(dst, path, &mut bytes) {
            Ok(()) => true,
            Err(err @ MergeError::Sink(_)) => return Err(err),
            Err(err) => {
                warn!("Failed to read {}: {}", path.display(), err);
                warnings.push(MergeWarning::new(
                    path,
                    err.to_string(),
                    WarningKind::ReadFailed,
                ));
                false
            }
        };
        if complete && bytes == 0 {
            warn!("File {} is empty", path.display());
            warnings.push(MergeWarning::new(
                path,
                "file is empty",
                WarningKind::EmptyFile,
            ));
        }

        dst.write_all(PADDING).map_err(MergeError::Sink)?;
        merged.push(MergedFile {
            path: path.clone(),
            display_path: shown,
            bytes,
            complete,
        });
    }
    Ok(merged)
}

// A stale output left inside an input directory must not be read back into itself.
fn exclude_output(files: &mut Vec<PathBuf>, output: &Path, warnings: &mut Vec<MergeWarning>) {
    let Ok(output) = fs::canonicalize(output) else {
        return;
    };
    files.retain(|path| {
        let is_output = fs::canonicalize(path).is_ok_and(|p| p == output);
        if is_output {
            warn!("Leaving out the output file {}", path.display());
            warnings.push(MergeWarning::new(
                path,
                "path is the output file",
                WarningKind::OutputExcluded,
            ));
        }
        !is_output
    });
}
