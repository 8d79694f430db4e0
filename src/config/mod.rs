mod schema;

pub use schema::Config;

use std::time::Duration;

/// Parse a duration string like "100ms", "1s", "5m", "1h".
/// Returns None for invalid formats.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();

    // Try to find where the number ends and unit begins
    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    let (num_str, unit) = s.split_at(num_end);

    let num: f64 = num_str.parse().ok()?;

    let multiplier = match unit.trim().to_lowercase().as_str() {
        "" | "ms" => 1.0,
        "s" => 1000.0,
        "m" => 60_000.0,
        "h" => 3_600_000.0,
        _ => return None,
    };

    Some(Duration::from_millis((num * multiplier) as u64))
}
