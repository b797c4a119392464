//! QMusic support library.
//!
//! Helpers behind the QMusic desktop player: cover art discovery, tag
//! metadata normalization, duration formatting, file URL handling, the
//! per-user config directory and an admin-privilege check.

pub mod config;
pub mod cover;
pub mod error;
pub mod metadata;
pub mod paths;
pub mod platform;
#[cfg(test)]
pub mod test_utils;
pub mod time;

pub use error::{Error, Result};
