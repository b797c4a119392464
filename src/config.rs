//! Per-user configuration directory.
//!
//! Everything lives under `~/.config/<program>`:
//! - plain line files such as `media.txt` (one entry per line)
//! - `settings.toml`, human-readable player settings
//!
//! The directory is an explicit [`ConfigDir`] value handed to whoever needs
//! it; nothing here keeps global state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::{SUPPORTED_FORMATS, has_extension_in};

/// Program name used for the config directory.
pub const PROGRAM_NAME: &str = "QMusic";

/// Line file holding the media list.
pub const MEDIA_FILE_NAME: &str = "media.txt";

/// Settings file name inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// A per-application configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    path: PathBuf,
}

impl ConfigDir {
    /// Wrap an existing path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/<program>` for the current user.
    pub fn for_program(program: &str) -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
        Ok(Self::new(home.join(".config").join(program)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file inside the directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Create the directory (and parents) if it does not exist yet.
    pub fn create(&self) -> Result<()> {
        if !self.path.is_dir() {
            fs::create_dir_all(&self.path)?;
            tracing::info!("Created config directory {:?}", self.path);
        }
        Ok(())
    }

    /// Replace `name` with one line per string, each ending in `\n`.
    ///
    /// The file is written in place; an interrupted write can leave it
    /// partially written.
    pub fn write_lines<S: AsRef<str>>(&self, name: &str, lines: &[S]) -> Result<()> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line.as_ref());
            contents.push('\n');
        }

        let path = self.file(name);
        fs::write(&path, contents)?;
        tracing::info!("Wrote {} lines to {:?}", lines.len(), path);
        Ok(())
    }

    /// Truncate `name` to an empty file, creating it if needed.
    pub fn clear_file(&self, name: &str) -> Result<()> {
        let path = self.file(name);
        fs::write(&path, "")?;
        tracing::info!("Cleared {:?}", path);
        Ok(())
    }

    /// Read the lines of `name`. A missing file reads as empty.
    pub fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        match fs::read_to_string(self.file(name)) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load settings from `settings.toml`.
    ///
    /// Returns defaults if the file doesn't exist or can't be parsed.
    /// Logs warnings but doesn't fail - we always return usable settings.
    pub fn load_settings(&self) -> Settings {
        let path = self.file(SETTINGS_FILE_NAME);

        if !path.exists() {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            return Settings::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::error!("Failed to parse settings file {:?}: {}", path, e);
                    tracing::warn!("Using default settings");
                    Settings::default()
                }
            },
            Err(e) => {
                tracing::error!("Failed to read settings file {:?}: {}", path, e);
                Settings::default()
            }
        }
    }

    /// Save settings to `settings.toml`, creating the directory if needed.
    pub fn save_settings(&self, settings: &Settings) -> std::result::Result<(), ConfigError> {
        fs::create_dir_all(&self.path).map_err(|e| ConfigError::CreateDir(self.path.clone(), e))?;

        let path = self.file(SETTINGS_FILE_NAME);
        let contents = toml::to_string_pretty(settings).map_err(ConfigError::Serialize)?;

        // Write to temp, then rename
        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
        fs::rename(&temp_path, &path)
            .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Player settings persisted in `settings.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Line file in the config directory holding the media list
    pub media_file: String,

    /// Audio extensions accepted when adding media
    pub supported_formats: Vec<String>,
}

impl Settings {
    /// Whether `path` has one of the configured audio extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        has_extension_in(path, &self.supported_formats)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            media_file: MEDIA_FILE_NAME.to_string(),
            supported_formats: SUPPORTED_FORMATS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Settings persistence errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, io::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write settings to {0}: {1}")]
    Write(PathBuf, io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config() -> (TempDir, ConfigDir) {
        let temp = TempDir::new().unwrap();
        let dir = ConfigDir::new(temp.path().join("QMusic"));
        (temp, dir)
    }

    #[test]
    fn test_for_program_is_under_dot_config() {
        let dir = ConfigDir::for_program("QMusic").unwrap();
        assert!(dir.path().ends_with(".config/QMusic"));
    }

    #[test]
    fn test_create_is_idempotent() {
        let (_temp, dir) = temp_config();
        assert!(!dir.path().exists());

        dir.create().unwrap();
        assert!(dir.path().is_dir());
        dir.create().unwrap();
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_write_lines_format() {
        let (_temp, dir) = temp_config();
        dir.create().unwrap();

        dir.write_lines(MEDIA_FILE_NAME, &["/music/a.mp3", "/music/b.flac"])
            .unwrap();

        let raw = fs::read_to_string(dir.file(MEDIA_FILE_NAME)).unwrap();
        assert_eq!(raw, "/music/a.mp3\n/music/b.flac\n");
    }

    #[test]
    fn test_write_then_read_lines() {
        let (_temp, dir) = temp_config();
        dir.create().unwrap();

        let lines = vec!["one".to_string(), "two".to_string()];
        dir.write_lines("list.txt", &lines[..]).unwrap();
        assert_eq!(dir.read_lines("list.txt").unwrap(), lines);
    }

    #[test]
    fn test_write_lines_overwrites() {
        let (_temp, dir) = temp_config();
        dir.create().unwrap();

        dir.write_lines("list.txt", &["a", "b", "c"]).unwrap();
        dir.write_lines("list.txt", &["d"]).unwrap();
        assert_eq!(dir.read_lines("list.txt").unwrap(), vec!["d".to_string()]);
    }

    #[test]
    fn test_clear_file() {
        let (_temp, dir) = temp_config();
        dir.create().unwrap();

        dir.write_lines(MEDIA_FILE_NAME, &["x"]).unwrap();
        dir.clear_file(MEDIA_FILE_NAME).unwrap();

        assert_eq!(fs::read_to_string(dir.file(MEDIA_FILE_NAME)).unwrap(), "");
        assert!(dir.read_lines(MEDIA_FILE_NAME).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let (_temp, dir) = temp_config();
        dir.create().unwrap();
        assert!(dir.read_lines("nothing.txt").unwrap().is_empty());
    }

    #[test]
    fn test_write_without_directory_fails() {
        let (_temp, dir) = temp_config();
        let err = dir.write_lines("list.txt", &["a"]).unwrap_err();
        assert_eq!(err.io_error().map(|e| e.kind()), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_default_settings_serialize() {
        let toml = toml::to_string_pretty(&Settings::default()).unwrap();
        assert!(toml.contains("media_file = \"media.txt\""));
        assert!(toml.contains("supported_formats = ["));
    }

    #[test]
    fn test_settings_roundtrip_on_disk() {
        let (_temp, dir) = temp_config();

        let settings = Settings {
            supported_formats: vec!["ogg".to_string(), "opus".to_string()],
            ..Settings::default()
        };
        dir.save_settings(&settings).unwrap();

        assert_eq!(dir.load_settings(), settings);
        assert!(!dir.file("settings.toml.tmp").exists());
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let (_temp, dir) = temp_config();
        dir.create().unwrap();
        fs::write(dir.file(SETTINGS_FILE_NAME), "media_file = \"queue.txt\"\n").unwrap();

        let settings = dir.load_settings();
        assert_eq!(settings.media_file, "queue.txt");
        assert_eq!(settings.supported_formats, vec!["wav", "mp3", "m4a", "flac"]);
    }

    #[test]
    fn test_settings_accepts_configured_formats() {
        let settings = Settings {
            supported_formats: vec!["ogg".to_string()],
            ..Settings::default()
        };
        assert!(settings.accepts(Path::new("/music/x.ogg")));
        assert!(settings.accepts(Path::new("/music/X.OGG")));
        assert!(!settings.accepts(Path::new("/music/x.mp3")));

        assert!(Settings::default().accepts(Path::new("x.flac")));
    }

    #[test]
    fn test_invalid_settings_fall_back_to_defaults() {
        let (_temp, dir) = temp_config();
        dir.create().unwrap();
        fs::write(dir.file(SETTINGS_FILE_NAME), "this is = = not toml").unwrap();

        assert_eq!(dir.load_settings(), Settings::default());
    }
}
