//! Candidate image discovery.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageReader;
use natord::compare;

/// The fixed set of candidate images for one orientation.
///
/// Built once by scanning a directory and never modified afterwards, so it is
/// shared between monitors through an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePool {
    images: Arc<[PathBuf]>,
}

impl ImagePool {
    /// Creates a pool from already-vetted paths.
    #[must_use]
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self { images: paths.into_iter().collect() }
    }

    /// Scans `dir` for decodable images.
    ///
    /// Missing or unreadable directories give an empty pool. Entries are kept
    /// only when they are regular files with a `.` in their name and sniff as
    /// an image format this build decodes. Anything else is skipped silently.
    #[must_use]
    pub fn scan(dir: &Path) -> Self {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "cannot read image directory");
                return Self::default();
            }
        };

        let mut images: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| is_candidate(path))
            .collect();

        // Natural sort keeps scans deterministic ("img2" before "img10").
        images.sort_by(|a, b| compare(a.to_string_lossy().as_ref(), b.to_string_lossy().as_ref()));

        tracing::debug!(dir = %dir.display(), count = images.len(), "scanned image directory");
        Self::from_paths(images)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.images.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.images.is_empty() }

    #[must_use]
    pub fn images(&self) -> &[PathBuf] { &self.images }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool { self.images.iter().any(|p| p == path) }
}

fn is_candidate(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    // A `.` anywhere in the name counts as the extension marker, so `.png` is kept.
    if !path.file_name().is_some_and(|name| name.to_string_lossy().contains('.')) {
        tracing::debug!(path = %path.display(), "skipping file without extension");
        return false;
    }

    if is_decodable_image(path) {
        true
    } else {
        tracing::debug!(path = %path.display(), "skipping non-image file");
        false
    }
}

/// Sniffs the file header for an image format this build can decode.
///
/// Only the magic bytes are inspected; the image is not decoded and the file
/// extension plays no part in the guess. Formats that are recognized but whose
/// decoder is not compiled in (TIFF, ICO, ...) are rejected.
#[must_use]
pub fn is_decodable_image(path: &Path) -> bool {
    File::open(path)
        .and_then(|file| ImageReader::new(BufReader::new(file)).with_guessed_format())
        .is_ok_and(|reader| reader.format().is_some_and(|format| format.reading_enabled()))
}
