//! Audio file metadata normalization.
//!
//! Tags are read with the lofty crate and exposed as raw ID3v2-style frames
//! ([`TagFrames`]). [`Metadata`] pulls the human-readable fields the player
//! shows out of those frames.

mod frames;

use lofty::file::{FileType, TaggedFileExt};
use lofty::id3::v2::Id3v2Tag;
use lofty::probe::Probe;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};

pub use frames::{FrameValue, PICTURE_FRAME_PREFIX, TagFrames};

/// Frame holding the track title.
pub const TITLE_FRAME: &str = "TIT2";
/// Frame holding the album name.
pub const ALBUM_FRAME: &str = "TALB";

/// Track title and album, each absent when the tag does not carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    title: Option<String>,
    album: Option<String>,
}

impl Metadata {
    /// Extract title and album from the first text value of `TIT2`/`TALB`.
    pub fn from_frames(frames: &TagFrames) -> Self {
        Self {
            title: frames.first_text(TITLE_FRAME).map(str::to_string),
            album: frames.first_text(ALBUM_FRAME).map(str::to_string),
        }
    }

    /// Read an audio file and extract its metadata.
    pub fn read(path: &Path) -> Result<Self> {
        Ok(Self::from_frames(&read_frames(path)?))
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }
}

/// Read the raw tag frames of an audio file.
///
/// The file's primary tag (or the first tag present) is viewed as ID3v2, so
/// FLAC, M4A and WAV files expose the same frame keys as MP3. A file with no
/// tag yields an empty mapping.
pub fn read_frames(path: &Path) -> Result<TagFrames> {
    let file = File::open(path)?;
    let mut probe = Probe::new(BufReader::new(file));
    if let Some(file_type) = FileType::from_path(path) {
        probe = probe.set_file_type(file_type);
    }

    // Content sniffing overrides the extension when it recognizes the file
    let tagged_file = probe
        .guess_file_type()?
        .read()
        .map_err(|e| Error::metadata(path, e.to_string()))?;

    let Some(tag) = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())
    else {
        tracing::debug!(path = %path.display(), "No tags found");
        return Ok(TagFrames::new());
    };

    let frames = TagFrames::from_id3v2(&Id3v2Tag::from(tag.clone()));
    tracing::debug!(path = %path.display(), frames = frames.len(), "Read tag frames");
    Ok(frames)
}
