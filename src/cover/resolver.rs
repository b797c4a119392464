//! Cover art resolution for a single track.
//!
//! Priority:
//! 1. Embedded in file tags (most accurate)
//! 2. Sidecar image in the track's directory

use std::path::Path;

use crate::error::Result;
use crate::metadata::read_frames;

use super::CoverArt;
use super::embedded::cover_art_from_frames;
use super::sidecar::find_cover_art;

/// Resolve cover art for an audio file from local sources.
///
/// Unreadable tags or an undecodable embedded picture are logged and the
/// sidecar lookup is tried instead. Only a failure to list the track's
/// directory is returned as an error.
pub fn resolve_local(audio_path: &Path) -> Result<Option<CoverArt>> {
    match read_frames(audio_path).and_then(|frames| cover_art_from_frames(&frames)) {
        Ok(Some(image)) => return Ok(Some(CoverArt::Embedded(image))),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(path = %audio_path.display(), error = %e, "Skipping embedded cover art");
        }
    }

    let Some(dir) = audio_path.parent() else {
        return Ok(None);
    };
    // A bare file name has an empty parent; that means the working directory
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };

    Ok(find_cover_art(dir)?.map(CoverArt::Sidecar))
}
