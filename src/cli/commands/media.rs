//! Config directory, settings and media list commands.

use std::path::PathBuf;
use tracing::warn;

use qmusic::config::ConfigDir;

/// Print (and optionally create) the config directory
pub fn cmd_config_dir(dir: &ConfigDir, create: bool) -> anyhow::Result<()> {
    if create {
        dir.create()?;
    }
    println!("{}", dir.path().display());
    Ok(())
}

/// Print the effective settings, optionally saving them
pub fn cmd_settings(dir: &ConfigDir, init: bool) -> anyhow::Result<()> {
    let settings = dir.load_settings();
    if init {
        dir.save_settings(&settings)?;
    }
    print!("{}", toml::to_string_pretty(&settings)?);
    Ok(())
}

/// Print every entry of the media list
pub fn cmd_media_list(dir: &ConfigDir) -> anyhow::Result<()> {
    let settings = dir.load_settings();
    let entries = dir.read_lines(&settings.media_file)?;
    if entries.is_empty() {
        println!("Media list is empty.");
    }
    for entry in entries {
        println!("{}", entry);
    }
    Ok(())
}

/// Append audio files with a configured extension to the media list
pub fn cmd_media_add(dir: &ConfigDir, paths: &[PathBuf]) -> anyhow::Result<()> {
    let settings = dir.load_settings();
    dir.create()?;

    let mut entries = dir.read_lines(&settings.media_file)?;
    let before = entries.len();

    for path in paths {
        if !settings.accepts(path) {
            warn!(path = %path.display(), "Skipping unsupported format");
            continue;
        }
        let entry = std::path::absolute(path)?.to_string_lossy().into_owned();
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }

    dir.write_lines(&settings.media_file, entries.as_slice())?;
    println!("Added {} file(s) to the media list.", entries.len() - before);
    Ok(())
}

/// Empty the media list
pub fn cmd_media_clear(dir: &ConfigDir) -> anyhow::Result<()> {
    let settings = dir.load_settings();
    dir.create()?;
    dir.clear_file(&settings.media_file)?;
    println!("Media list cleared.");
    Ok(())
}
