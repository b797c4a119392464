//! Duration formatting for track lengths and playback positions.

/// Round milliseconds to whole seconds, ties to even.
fn round_ms_to_secs(ms: u64) -> u64 {
    let secs = ms / 1000;
    let rem = ms % 1000;
    if rem > 500 || (rem == 500 && secs % 2 == 1) {
        secs + 1
    } else {
        secs
    }
}

/// Format milliseconds as `h:mm:ss`, or `m:ss` when under an hour.
///
/// Milliseconds are rounded to the nearest second with ties going to the
/// even second, so `500` formats as `0:00` and `1500` as `0:02`.
pub fn to_hhmmss(ms: u64) -> String {
    let secs = round_ms_to_secs(ms);
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}
