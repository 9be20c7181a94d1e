//! Output block formatting for merged files.
//!
//! Every merged file becomes one block: a [`header_line`], the file's bytes
//! copied verbatim, then [`PADDING`].

use crate::MergeError;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Component, Path, PathBuf};

/// Written after every file's content.
pub const PADDING: &[u8] = b"\n\n";

const COPY_BUF_LEN: usize = 8 * 1024;

/// Returns the header line for a display path, including the trailing newline.
pub fn header_line(display_path: &str) -> String {
    format!("==== {} ====\n", display_path)
}

/// Returns `path` relative to `base`, or `path` as given when there is no base
/// or no relative form exists.
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|base| relative_to(path, base))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

/// Copies the file at `path` into `dst` and returns the number of bytes copied.
///
/// # Errors
///
/// [`MergeError::Io`] when the source cannot be opened or read, and
/// [`MergeError::Sink`] when writing to `dst` fails.
pub fn copy_file_to<W: Write + ?Sized>(dst: &mut W, path: &Path) -> Result<u64, MergeError> {
    let mut written = 0;
    stream_into(dst, path, &mut written)?;
    Ok(written)
}

/// Like [`copy_file_to`], but keeps the count of bytes already copied when
/// the source fails part way.
pub(crate) fn stream_into<W: Write + ?Sized>(
    dst: &mut W,
    path: &Path,
    written: &mut u64,
) -> Result<(), MergeError> {
    let mut file = File::open(path).map_err(|e| MergeError::io(path, e))?;
    let mut buf = vec![0u8; COPY_BUF_LEN];
    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(MergeError::io(path, e)),
        };
        dst.write_all(&buf[..n]).map_err(MergeError::Sink)?;
        *written += n as u64;
    }
}

fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    if path.is_absolute() != base.is_absolute() {
        return None;
    }
    let path = normalize(path);
    let base = normalize(base);
    let mut path_rest = path.components().peekable();
    let mut base_rest = base.components().peekable();
    while let (Some(a), Some(b)) = (path_rest.peek(), base_rest.peek()) {
        if a != b {
            break;
        }
        path_rest.next();
        base_rest.next();
    }
    let mut relative = PathBuf::new();
    for component in base_rest {
        match component {
            Component::Normal(_) => relative.push(".."),
            // A base that climbs out of the common prefix cannot be undone.
            _ => return None,
        }
    }
    relative.extend(path_rest);
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

/// Lexically resolves `.` and `..` without touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    out.pop();
                } else if !matches!(last, Some(Component::RootDir | Component::Prefix(_))) {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_nested() {
        let rel = relative_to(Path::new("/work/docs/a.md"), Path::new("/work"));
        assert_eq!(rel, Some(PathBuf::from("docs/a.md")));
    }

    #[test]
    fn test_relative_to_sibling() {
        let rel = relative_to(Path::new("/work/a/x.txt"), Path::new("/work/b/c"));
        assert_eq!(rel, Some(PathBuf::from("../../a/x.txt")));
    }

    #[test]
    fn test_relative_to_mixed_kinds() {
        assert_eq!(relative_to(Path::new("/abs/x.txt"), Path::new("rel")), None);
    }

    #[test]
    fn test_display_path_falls_back_to_path() {
        assert_eq!(display_path(Path::new("/abs/x.txt"), None), "/abs/x.txt");
        assert_eq!(
            display_path(Path::new("/abs/x.txt"), Some(Path::new("rel"))),
            "/abs/x.txt"
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("../x/..")), PathBuf::from(".."));
    }

    #[test]
    fn test_header_line() {
        assert_eq!(header_line("src/main.rs"), "==== src/main.rs ====\n");
    }
}
