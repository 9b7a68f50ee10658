//! Scrub-bar math, kept free of DOM types so it can be exercised
//! without a rendering surface.

/// Normalized position of a pointer over the bar, clamped to `[0, 1]`.
pub fn drag_ratio(client_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return 0.0;
    }
    ((client_x - bar_left) / bar_width).clamp(0.0, 1.0)
}

/// Seek target for a normalized position.
pub fn seek_target(ratio: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0) * duration
}

/// Fraction of the bar to fill for the current playback position.
pub fn progress_ratio(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
        return 0.0;
    }
    (current_time / duration).clamp(0.0, 1.0)
}

/// Renders seconds as `m:ss`. Invalid durations (metadata not loaded
/// yet) render as zero rather than propagating `NaN`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped_to_unit_interval() {
        assert_eq!(drag_ratio(50.0, 100.0, 200.0), 0.0);
        assert_eq!(drag_ratio(400.0, 100.0, 200.0), 1.0);
        assert_eq!(drag_ratio(200.0, 100.0, 200.0), 0.5);
    }

    #[test]
    fn zero_width_bar_yields_zero() {
        assert_eq!(drag_ratio(120.0, 100.0, 0.0), 0.0);
        assert_eq!(drag_ratio(120.0, 100.0, f64::NAN), 0.0);
    }

    #[test]
    fn seek_target_scales_by_duration() {
        assert_eq!(seek_target(0.5, 120.0), 60.0);
        assert_eq!(seek_target(0.0, 120.0), 0.0);
        assert_eq!(seek_target(1.0, 120.0), 120.0);
    }

    #[test]
    fn seek_target_guards_missing_duration() {
        assert_eq!(seek_target(0.5, f64::NAN), 0.0);
        assert_eq!(seek_target(0.5, 0.0), 0.0);
    }

    #[test]
    fn progress_tracks_position() {
        assert_eq!(progress_ratio(30.0, 120.0), 0.25);
        assert_eq!(progress_ratio(0.0, 120.0), 0.0);
        // Position past the end stays pinned to the full bar.
        assert_eq!(progress_ratio(150.0, 120.0), 1.0);
    }

    #[test]
    fn progress_guards_invalid_duration() {
        assert_eq!(progress_ratio(30.0, f64::NAN), 0.0);
        assert_eq!(progress_ratio(30.0, 0.0), 0.0);
    }

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(7.9), "0:07");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(119.0), "1:59");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn invalid_seconds_render_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn half_way_through_two_minutes() {
        // Dragging to 50% of a 120 s video seeks to 60 s and the
        // display reads 1:00.
        let duration = 120.0;
        let ratio = drag_ratio(250.0, 100.0, 300.0);
        assert_eq!(ratio, 0.5);
        let target = seek_target(ratio, duration);
        assert_eq!(target, 60.0);
        assert_eq!(format_time(target), "1:00");
        assert_eq!(progress_ratio(target, duration), 0.5);
    }
}
