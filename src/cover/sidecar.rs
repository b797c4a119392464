//! Detect sidecar cover art files in an album directory.
//!
//! A sidecar is any jpg/jpeg/png whose name contains one of the usual cover
//! keywords, e.g. `cover.jpg`, `Front.PNG` or `AlbumArt_folder.jpeg`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Keywords that mark an image as cover art (lowercase for matching)
const COVER_KEYWORDS: &[&str] = &["cover", "front", "folder"];

/// Image extensions considered for cover art
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Check if a path has a cover-art image extension (case-insensitive).
pub fn is_image_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    ext.is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn has_cover_keyword(name: &str) -> bool {
    let lower = name.to_lowercase();
    COVER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Find a cover art image directly inside `dir`.
///
/// Entries are visited in directory-listing order (platform dependent, not
/// sorted) and the first image whose file name contains a cover keyword is
/// returned. Subdirectories are not searched.
///
/// Fails with the underlying I/O error if `dir` cannot be listed.
pub fn find_cover_art(dir: &Path) -> Result<Option<PathBuf>> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        if is_image_file(Path::new(name)) && has_cover_keyword(name) {
            let path = dir.join(name);
            tracing::debug!(path = %path.display(), "Found sidecar cover art");
            return Ok(Some(path));
        }
    }

    tracing::debug!(dir = %dir.display(), "No sidecar cover art");
    Ok(None)
}
