//! Test fixtures shared across modules.
//!
//! ```ignore
//! use crate::test_utils::dir_with_files;
//!
//! let temp = dir_with_files(&["folder.jpg", "track.mp3"]);
//! // Files are deleted when `temp` goes out of scope
//! ```

use image::{DynamicImage, ImageFormat};
use lofty::config::WriteOptions;
use lofty::id3::v2::Id3v2Tag;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::tag::{Accessor, TagExt};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::metadata::{FrameValue, TagFrames};

/// Creates a temporary directory holding the named files.
///
/// Each file gets a few placeholder bytes; contents are not valid media.
pub fn dir_with_files(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    for name in names {
        std::fs::write(dir.path().join(name), b"placeholder").expect("Failed to write fixture");
    }
    dir
}

/// Creates a temporary file with the given contents.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_file_with(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    (dir, path)
}

/// Builds a frame mapping holding only text frames, in the given order.
pub fn frames_with_text(entries: &[(&str, &[&str])]) -> TagFrames {
    entries
        .iter()
        .map(|(key, values)| {
            let values = values.iter().map(|v| v.to_string()).collect();
            (*key, FrameValue::Text(values))
        })
        .collect()
}

/// Encodes a blank RGB image of the given size as PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::new_rgb8(width, height)
        .write_to(&mut buf, ImageFormat::Png)
        .expect("Failed to encode PNG");
    buf.into_inner()
}

/// Builds a PNG picture with a description, ready for `insert_picture`.
pub fn cover_picture(pic_type: PictureType, description: &str, data: Vec<u8>) -> Picture {
    Picture::new_unchecked(
        pic_type,
        Some(MimeType::Png),
        Some(description.to_string()),
        data,
    )
}

/// Minimal mono 16-bit PCM WAV holding `samples` zero samples.
fn silent_wav(samples: u32) -> Vec<u8> {
    let data_len = samples * 2;
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(4 + 8 + 16 + 8 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // channels
    wav.extend_from_slice(&8000u32.to_le_bytes()); // sample rate
    wav.extend_from_slice(&16000u32.to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(wav.len() + data_len as usize, 0);
    wav
}

/// Writes a short WAV file into `dir` carrying an ID3v2 tag with the given
/// title, album and PNG pictures (description, width, height), in order.
pub fn tagged_wav(
    dir: &Path,
    name: &str,
    title: &str,
    album: &str,
    pictures: &[(&str, u32, u32)],
) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, silent_wav(8000)).expect("Failed to write WAV fixture");

    let mut tag = Id3v2Tag::new();
    tag.set_title(title.to_string());
    tag.set_album(album.to_string());
    let types = [
        PictureType::CoverFront,
        PictureType::CoverBack,
        PictureType::Leaflet,
        PictureType::Media,
    ];
    for ((description, width, height), pic_type) in pictures.iter().zip(types.iter().cycle()) {
        tag.insert_picture(cover_picture(
            *pic_type,
            description,
            png_bytes(*width, *height),
        ));
    }
    tag.save_to_path(&path, WriteOptions::default())
        .expect("Failed to save ID3v2 tag");
    path
}
