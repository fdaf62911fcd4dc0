//! Path utilities for shell-like path expansion.
//!
//! Configured directories support tilde (`~`) expansion and resolve relative
//! paths against the process working directory.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Absolute and relative paths are returned unchanged.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Expands shell-like paths and resolves relative paths against `base_dir`.
///
/// - Absolute (starts with `/`): returned as-is after tilde expansion
/// - Home-relative (starts with `~`): expanded to the user's home directory
/// - Relative: joined onto `base_dir`
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return base_dir.to_path_buf();
    }

    let expanded = expand(path);
    if expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}
