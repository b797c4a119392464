//! Cover art lookup and tag inspection commands.

use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

use qmusic::cover::{self, CoverArt};
use qmusic::metadata::{self, FrameValue, Metadata};
use qmusic::paths::is_supported_format;

/// Find cover art for a directory or an audio file
pub fn cmd_cover(path: &Path) -> anyhow::Result<()> {
    if path.is_dir() {
        match cover::find_cover_art(path)? {
            Some(found) => println!("{}", found.display()),
            None => println!("No cover art found in {}", path.display()),
        }
        return Ok(());
    }

    if !is_supported_format(path) {
        warn!(path = %path.display(), "Not a supported audio format, checking sidecar only");
    }

    match cover::resolve_local(path)? {
        Some(art) => {
            let detail = match &art {
                CoverArt::Embedded(image) => format!("{}x{}", image.width(), image.height()),
                CoverArt::Sidecar(found) => found.display().to_string(),
            };
            println!("{}: {}", art.source_label(), detail);
        }
        None => println!("No cover art found for {}", path.display()),
    }
    Ok(())
}

/// Print title, album and embedded picture info
pub fn cmd_tags(path: &Path, verbose: bool) -> anyhow::Result<()> {
    let frames = match metadata::read_frames(path) {
        Ok(frames) => frames,
        Err(e) if e.io_error().is_some_and(|io| io.kind() == ErrorKind::NotFound) => {
            anyhow::bail!("File not found: {}", path.display());
        }
        Err(e) => return Err(e.into()),
    };
    let meta = Metadata::from_frames(&frames);

    println!("File:    {}", path.display());
    println!("Title:   {}", meta.title().unwrap_or("-"));
    println!("Album:   {}", meta.album().unwrap_or("-"));

    match cover::cover_art_from_frames(&frames) {
        Ok(Some(image)) => println!("Picture: {}x{}", image.width(), image.height()),
        Ok(None) => println!("Picture: -"),
        Err(e) => println!("Picture: unreadable ({})", e),
    }

    if verbose {
        println!("\nFrames:");
        for (key, value) in frames.iter() {
            match value {
                FrameValue::Text(values) => println!("  {:<12} {}", key, values.join(" / ")),
                FrameValue::Picture(data) => println!("  {:<12} <{} bytes>", key, data.len()),
                FrameValue::Other => println!("  {}", key),
            }
        }
    }
    Ok(())
}
