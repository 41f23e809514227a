use chrono::TimeDelta;

/// Converts the raw seconds reported by a store into an elapsed interval.
/// Fractional seconds are truncated.
pub fn elapsed_from_seconds(seconds: f64) -> TimeDelta {
    TimeDelta::try_seconds(seconds.trunc() as i64).unwrap_or(TimeDelta::MAX)
}

/// Renders an interval as `"{d}d {HH}h {MM}m"`, dropping the day part when it is zero.
/// Negative intervals render as zero.
pub fn format_duration(elapsed: TimeDelta) -> String {
    let elapsed = elapsed.max(TimeDelta::zero());
    let total_hours = elapsed.num_hours();
    let days = total_hours / 24;
    let hours = total_hours % 24;
    let minutes = elapsed.num_minutes() % 60;

    if days > 0 {
        format!("{days}d {hours:02}h {minutes:02}m")
    } else {
        format!("{hours:02}h {minutes:02}m")
    }
}
