//! CLI command definitions and dispatch.
//!
//! Each group of subcommands lives in its own submodule:
//! - `art`: cover art lookup and tag inspection
//! - `media`: the config directory, settings and the media list file
//! - `util`: duration formatting, URL conversion, privilege check

mod art;
mod media;
mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use qmusic::config::{ConfigDir, PROGRAM_NAME};

pub use art::{cmd_cover, cmd_tags};
pub use media::{cmd_config_dir, cmd_media_add, cmd_media_clear, cmd_media_list, cmd_settings};
pub use util::{cmd_admin, cmd_duration, cmd_url_path};

/// QMusic helper CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config directory (default: ~/.config/QMusic)
    #[arg(long, global = true, env = "QMUSIC_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Find cover art for an album directory or an audio file
    Cover {
        /// Album directory, or an audio file to check embedded art first
        path: PathBuf,
    },
    /// Show title, album and embedded picture of an audio file
    Tags {
        /// Path to the audio file
        path: PathBuf,
        /// Also list every raw frame key
        #[arg(short, long)]
        verbose: bool,
    },
    /// Format a millisecond count as h:mm:ss / m:ss
    Duration {
        /// Duration in milliseconds
        ms: u64,
    },
    /// Convert a file:// URL to a filesystem path
    UrlPath {
        /// URL string, e.g. file:///home/user/song.mp3
        url: String,
    },
    /// Report whether the process has administrator privileges
    Admin,
    /// Print the config directory path
    ConfigDir {
        /// Create the directory if it does not exist
        #[arg(long)]
        create: bool,
    },
    /// Print the effective settings
    Settings {
        /// Write the effective settings to settings.toml
        #[arg(long)]
        init: bool,
    },
    /// Manage the media list file
    Media {
        #[command(subcommand)]
        action: MediaAction,
    },
}

/// Media list operations
#[derive(Subcommand)]
pub enum MediaAction {
    /// Print the media list
    List,
    /// Append audio files with a configured extension to the media list
    Add {
        /// Audio files to add
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Empty the media list
    Clear,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Cover { path } => cmd_cover(path),
        Commands::Tags { path, verbose } => cmd_tags(path, *verbose),
        Commands::Duration { ms } => {
            cmd_duration(*ms);
            Ok(())
        }
        Commands::UrlPath { url } => {
            cmd_url_path(url);
            Ok(())
        }
        Commands::Admin => {
            cmd_admin();
            Ok(())
        }
        Commands::ConfigDir { create } => cmd_config_dir(&resolve_config_dir(cli)?, *create),
        Commands::Settings { init } => cmd_settings(&resolve_config_dir(cli)?, *init),
        Commands::Media { action } => {
            let dir = resolve_config_dir(cli)?;
            match action {
                MediaAction::List => cmd_media_list(&dir),
                MediaAction::Add { paths } => cmd_media_add(&dir, paths),
                MediaAction::Clear => cmd_media_clear(&dir),
            }
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Config directory from `--config-dir`, or the per-user default
pub(crate) fn resolve_config_dir(cli: &Cli) -> anyhow::Result<ConfigDir> {
    match &cli.config_dir {
        Some(path) => Ok(ConfigDir::new(path)),
        None => Ok(ConfigDir::for_program(PROGRAM_NAME)?),
    }
}
