//! Small conversion and privilege commands.

use qmusic::paths::url_to_path;
use qmusic::platform::is_admin;
use qmusic::time::to_hhmmss;

/// Print a millisecond count as h:mm:ss / m:ss
pub fn cmd_duration(ms: u64) {
    println!("{}", to_hhmmss(ms));
}

/// Print the filesystem path of a file:// URL
pub fn cmd_url_path(url: &str) {
    println!("{}", url_to_path(url));
}

/// Report whether the process runs with administrator privileges
pub fn cmd_admin() {
    if is_admin() {
        println!("Running with administrator privileges.");
    } else {
        println!("Running without administrator privileges.");
    }
}
