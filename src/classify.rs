//! Text classification of candidate files.
//!
//! Only the first [`PROBE_LEN`] bytes of a file are inspected. The default
//! heuristic rejects a probe that contains a zero byte, is not valid UTF-8, or
//! has more than [`MAX_CONTROL_RATIO`] control bytes. Encodings such as UTF-16
//! are rejected by it.

use crate::error::MergeError;
use crate::options::TextDetection;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Number of leading bytes read from a file to classify it.
pub const PROBE_LEN: usize = 1024;

/// Highest share of control bytes a text probe may contain.
pub const MAX_CONTROL_RATIO: f64 = 0.30;

/// Classifies `path` with the given strategy.
///
/// # Errors
///
/// Returns [`MergeError::Io`] when the file cannot be opened or the probe
/// read fails.
pub fn is_text_file(path: &Path, detection: TextDetection) -> Result<bool, MergeError> {
    if detection == TextDetection::None {
        return Ok(true);
    }
    let probe = read_probe(path)?;
    let is_text = match detection {
        TextDetection::Heuristic => looks_like_text(&probe),
        TextDetection::Inspector => !content_inspector::inspect(&probe).is_binary(),
        TextDetection::None => true,
    };
    if !is_text {
        debug!("Not a text file: {}", path.display());
    }
    Ok(is_text)
}

fn read_probe(path: &Path) -> Result<Vec<u8>, MergeError> {
    let file = File::open(path).map_err(|e| MergeError::io(path, e))?;
    let mut probe = Vec::with_capacity(PROBE_LEN);
    file.take(PROBE_LEN as u64)
        .read_to_end(&mut probe)
        .map_err(|e| MergeError::io(path, e))?;
    Ok(probe)
}

/// Applies the text heuristic to a probe buffer.
///
/// An empty probe is text.
pub fn looks_like_text(probe: &[u8]) -> bool {
    if probe.contains(&0) {
        return false;
    }
    if std::str::from_utf8(probe).is_err() {
        return false;
    }
    if probe.is_empty() {
        return true;
    }
    let control = probe.iter().filter(|&&b| is_control(b)).count();
    control as f64 / probe.len() as f64 <= MAX_CONTROL_RATIO
}

// Tab, LF and CR are ordinary in text.
fn is_control(b: u8) -> bool {
    b < 32 && !matches!(b, b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_control_ratio_boundary() {
        // 3 control bytes out of 10 sits exactly on the limit.
        let mut probe = b"abcdefg".to_vec();
        probe.extend_from_slice(&[1, 2, 3]);
        assert!(looks_like_text(&probe));
        probe[0] = 4;
        assert!(!looks_like_text(&probe));
    }

    #[test]
    fn test_whitespace_controls_are_not_counted() {
        assert!(looks_like_text(b"\t\t\t\r\n\r\n\n\n"));
    }

    #[test]
    fn test_probe_reads_only_prefix() {
        let dir = tempdir().unwrap();
        let mut bytes = "a".repeat(PROBE_LEN).into_bytes();
        bytes.push(0);
        let path = write(dir.path(), "long.txt", &bytes);
        assert!(is_text_file(&path, TextDetection::Heuristic).unwrap());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = is_text_file(&dir.path().join("nope.txt"), TextDetection::Heuristic).unwrap_err();
        assert!(matches!(err, MergeError::Io { .. }));
    }

    #[test]
    fn test_detection_none_skips_probe() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "blob.bin", &[0, 159, 146, 150]);
        assert!(!is_text_file(&path, TextDetection::Heuristic).unwrap());
        assert!(is_text_file(&path, TextDetection::None).unwrap());
    }

    #[test]
    fn test_inspector_rejects_nul() {
        let dir = tempdir().unwrap();
        let text = write(dir.path(), "a.txt", b"plain text\n");
        let bin = write(dir.path(), "b.bin", &[0x7f, b'E', b'L', b'F', 0, 0, 0, 1]);
        assert!(is_text_file(&text, TextDetection::Inspector).unwrap());
        assert!(!is_text_file(&bin, TextDetection::Inspector).unwrap());
    }
}
