//! Normalization of user-supplied input paths.

use crate::output::normalize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Makes every input absolute, resolves `.` and `..` lexically and drops
/// repeats, keeping the first occurrence's position.
///
/// Inputs that cannot be made absolute are skipped with a warning.
pub fn normalize_inputs<I, P>(inputs: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        let absolute = match std::path::absolute(input) {
            Ok(p) => normalize(&p),
            Err(e) => {
                warn!("Skipping invalid path {}: {}", input.display(), e);
                continue;
            }
        };
        if seen.insert(absolute.clone()) {
            unique.push(absolute);
        }
    }
    unique
}
