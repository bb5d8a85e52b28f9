use chrono::TimeDelta;

/// `1m 05s`, or `42s` under a minute. Negative spans read as zero.
#[must_use]
pub fn format_elapsed(value: TimeDelta) -> String {
    let total = value.num_seconds().max(0);
    let minutes = total / 60;
    let seconds = total % 60;
    if minutes == 0 {
        format!("{seconds}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}
