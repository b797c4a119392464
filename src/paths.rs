//! Path helpers: file URLs, executable-relative resources and supported
//! audio formats.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Audio formats the player can open (lowercase extensions).
pub const SUPPORTED_FORMATS: &[&str] = &["wav", "mp3", "m4a", "flac"];

const FILE_URL_PREFIX: &str = "file://";

/// Byte (not char) offset of the drive colon in `file:///C:/...`.
const DRIVE_COLON_OFFSET: usize = 9;

/// Convert a `file://` URL string into a filesystem path string.
///
/// Drive-letter URLs (`file:///C:/x.mp3`) lose the slash before the drive,
/// giving `C:/x.mp3`; POSIX URLs keep it (`/home/user/x.mp3`). Anything
/// without the prefix is returned as is. No percent-decoding is done.
///
/// The drive check looks at byte offset 9, so a multi-byte character before
/// the colon (`file:///é:/x`) is not treated as a drive letter. Real drive
/// letters are ASCII.
pub fn url_to_path(url: &str) -> &str {
    if !url.starts_with(FILE_URL_PREFIX) {
        return url;
    }

    let unix_start = FILE_URL_PREFIX.len();
    let is_drive = url.as_bytes().get(DRIVE_COLON_OFFSET) == Some(&b':');
    if is_drive && let Some(rest) = url.get(unix_start + 1..) {
        return rest;
    }

    &url[unix_start..]
}

/// Directory containing the running executable, with symlinks resolved.
pub fn exec_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/")))
}

/// Path of a bundled resource: `<dir of exec_path>/resources/<name>`.
pub fn resource_path(name: &str, exec_path: &Path) -> PathBuf {
    exec_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("resources")
        .join(name)
}

/// Check if a path has a supported audio extension (case-insensitive).
pub fn is_supported_format(path: &Path) -> bool {
    has_extension_in(path, SUPPORTED_FORMATS)
}

/// Check if a path's extension is one of `extensions` (case-insensitive).
pub fn has_extension_in<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(ext))
}
