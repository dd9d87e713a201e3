//! Display helpers for track lengths and playback positions

/// Format a track length as `m:ss`
///
/// Unknown lengths (0 or non-finite) render as `--:--`.
pub fn format_duration(seconds: f64) -> String {
    if seconds == 0.0 || !seconds.is_finite() {
        return "--:--".to_string();
    }
    minutes_seconds(seconds)
}

/// Format a playback position as `m:ss`
///
/// Positions that are not yet known render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if seconds == 0.0 || !seconds.is_finite() {
        return "0:00".to_string();
    }
    minutes_seconds(seconds)
}

fn minutes_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_duration(183.7), "3:03");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn unknown_values_have_placeholders() {
        assert_eq!(format_duration(0.0), "--:--");
        assert_eq!(format_duration(f64::NAN), "--:--");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
