/// Helper utilities for StarWatch

use ratatui::layout::Rect;

/// Format a duration in seconds the way the dashboard shows it.
///
/// Whole hours and minutes above an hour, minutes and seconds above a minute,
/// plain seconds otherwise. Everything truncates; nothing rounds.
pub fn format_duration(seconds: f64) -> String {
    // NaN and negatives collapse to zero through the saturating cast
    let total = if seconds.is_finite() { seconds as u64 } else { 0 };

    if total >= 3600 {
        format!("{}h {}m", total / 3600, (total % 3600) / 60)
    } else if total >= 60 {
        format!("{}m {}s", total / 60, total % 60)
    } else {
        format!("{} s", total)
    }
}

/// Keep at most `max_chars` characters of `s`
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Centered popup area clamped to the enclosing area
pub fn centered_rect(max_width: u16, max_height: u16, area: Rect) -> Rect {
    let width = area.width.min(max_width);
    let height = area.height.min(max_height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45.0), "45 s");
        assert_eq!(format_duration(125.0), "2m 5s");
        assert_eq!(format_duration(3725.0), "1h 2m");
        assert_eq!(format_duration(3659.0), "1h 0m");
    }

    #[test]
    fn test_format_duration_boundaries() {
        assert_eq!(format_duration(0.0), "0 s");
        assert_eq!(format_duration(59.9), "59 s");
        assert_eq!(format_duration(60.0), "1m 0s");
        assert_eq!(format_duration(3599.0), "59m 59s");
        assert_eq!(format_duration(3600.0), "1h 0m");
        assert_eq!(format_duration(90061.0), "25h 1m");
    }

    #[test]
    fn test_format_duration_degenerate_input() {
        assert_eq!(format_duration(-12.0), "0 s");
        assert_eq!(format_duration(f64::NAN), "0 s");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef0123456789", 10), "abcdef0123");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 10, area), Rect::new(20, 15, 60, 10));

        let small = Rect::new(0, 0, 30, 5);
        assert_eq!(centered_rect(60, 10, small), small);
    }
}
