//! Extract cover art embedded in audio file tags.
//!
//! Pictures live in `APIC` frames. When a tag carries several, the last one
//! in frame order is used.

use image::DynamicImage;

use crate::error::Result;
use crate::metadata::{PICTURE_FRAME_PREFIX, TagFrames};

/// Raw bytes of the embedded picture, if any.
pub fn embedded_picture_data(frames: &TagFrames) -> Option<&[u8]> {
    frames
        .iter()
        .filter(|(key, _)| key.starts_with(PICTURE_FRAME_PREFIX))
        .filter_map(|(_, value)| value.data())
        .last()
}

/// Decode the embedded picture into an image.
///
/// Returns `Ok(None)` when the tag has no picture frame. Bytes that are not
/// a decodable image fail with [`crate::Error::Image`].
pub fn cover_art_from_frames(frames: &TagFrames) -> Result<Option<DynamicImage>> {
    let Some(data) = embedded_picture_data(frames) else {
        return Ok(None);
    };

    let image = image::load_from_memory(data)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "Decoded embedded cover art"
    );
    Ok(Some(image))
}
