//! Cover art discovery.
//!
//! Two local sources are supported:
//!
//! 1. **Embedded tags** - an `APIC` picture frame in the audio file
//! 2. **Sidecar files** - `folder.jpg`, `cover.png`, `front.jpeg`, etc. in
//!    the album directory
//!
//! Missing art is not an error; lookups return `None`.

mod embedded;
mod resolver;
mod sidecar;

use image::DynamicImage;
use std::path::PathBuf;

pub use embedded::{cover_art_from_frames, embedded_picture_data};
pub use resolver::resolve_local;
pub use sidecar::{find_cover_art, is_image_file};

/// Cover art found for a track.
#[derive(Debug, Clone)]
pub enum CoverArt {
    /// Decoded picture from the audio file's tags
    Embedded(DynamicImage),
    /// Image file next to the audio file
    Sidecar(PathBuf),
}

impl CoverArt {
    /// Short label for where the art came from.
    pub fn source_label(&self) -> &'static str {
        match self {
            Self::Embedded(_) => "embedded",
            Self::Sidecar(_) => "sidecar",
        }
    }
}
