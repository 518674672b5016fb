//! Layout math for the progress bar
//!
//! All values are in widget-local units. Percentages live on a 0-100 scale.
//! None of these functions panic or return NaN, whatever the frame size.

/// Upper bound of the percentage scale
pub const PERCENT_MAX: f32 = 100.0;

/// Clamp a percentage into `[0, 100]`. NaN maps to 0.
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, PERCENT_MAX)
    }
}

/// Width of the fill track for a given progress.
///
/// Floored at `handle_width` so the handle stays visible at 0%, and capped at
/// `total_width` so a frame narrower than the handle never overflows.
pub fn fill_width(progress: f32, total_width: f32, handle_width: f32) -> f32 {
    let total = total_width.max(0.0);

    (total * clamp_percent(progress) / PERCENT_MAX)
        .max(handle_width)
        .min(total)
}

/// Width of the buffer track. No minimum floor.
pub fn buffer_width(buffer_progress: f32, total_width: f32) -> f32 {
    total_width.max(0.0) * clamp_percent(buffer_progress) / PERCENT_MAX
}

/// Left edge of the handle: its right edge sits on the fill track's right edge.
pub fn handle_x(fill_width: f32, handle_width: f32) -> f32 {
    (fill_width - handle_width).max(0.0)
}

/// Map a pointer x coordinate to a percentage.
///
/// The usable travel is `total_width - handle_width`; the pointer is clamped
/// into it before scaling.
pub fn progress_at(pointer_x: f32, total_width: f32, handle_width: f32) -> f32 {
    let effective = total_width - handle_width;
    if !(effective > 0.0) {
        return 0.0;
    }

    let x = if pointer_x.is_nan() {
        0.0
    } else {
        pointer_x.clamp(0.0, effective)
    };

    x * PERCENT_MAX / effective
}

/// Horizontal origin of the preview overlay, centered on the pointer and kept
/// inside `[0, total_width - preview_width]`.
pub fn preview_x(pointer_x: f32, total_width: f32, preview_width: f32) -> f32 {
    let max_x = total_width - preview_width;

    (pointer_x - preview_width / 2.0).min(max_x).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fill_width_scenario() {
        assert_eq!(fill_width(30.0, 300.0, 10.0), 90.0);
        assert_eq!(fill_width(150.0, 300.0, 10.0), 300.0);
        assert_eq!(fill_width(-5.0, 300.0, 10.0), 10.0);
    }

    #[test]
    fn test_fill_width_handle_floor() {
        // 2% of 300 is 6, below the handle
        assert_eq!(fill_width(2.0, 300.0, 10.0), 10.0);
        assert_eq!(fill_width(0.0, 300.0, 10.0), 10.0);
    }

    #[test]
    fn test_fill_width_narrow_frame() {
        assert_eq!(fill_width(50.0, 6.0, 10.0), 6.0);
        assert_eq!(fill_width(50.0, 0.0, 10.0), 0.0);
        assert_eq!(handle_x(6.0, 10.0), 0.0);
    }

    #[test]
    fn test_buffer_width_has_no_floor() {
        assert_eq!(buffer_width(0.0, 300.0), 0.0);
        assert_eq!(buffer_width(50.0, 300.0), 150.0);
        assert_eq!(buffer_width(200.0, 300.0), 300.0);
    }

    #[test]
    fn test_handle_tracks_fill_edge() {
        let fill = fill_width(30.0, 300.0, 10.0);
        assert_eq!(handle_x(fill, 10.0), 80.0);
    }

    #[test]
    fn test_progress_at_endpoints() {
        assert_eq!(progress_at(0.0, 300.0, 10.0), 0.0);
        assert_eq!(progress_at(290.0, 300.0, 10.0), 100.0);
        assert_eq!(progress_at(300.0, 300.0, 10.0), 100.0);
        assert_eq!(progress_at(1000.0, 300.0, 10.0), 100.0);
        assert_eq!(progress_at(-40.0, 300.0, 10.0), 0.0);
        assert_eq!(progress_at(145.0, 300.0, 10.0), 50.0);
    }

    #[test]
    fn test_progress_at_degenerate_frame() {
        assert_eq!(progress_at(5.0, 10.0, 10.0), 0.0);
        assert_eq!(progress_at(5.0, 0.0, 10.0), 0.0);
        assert_eq!(progress_at(f32::NAN, 300.0, 10.0), 0.0);
    }

    #[test]
    fn test_preview_x_centers_on_pointer() {
        assert_eq!(preview_x(150.0, 300.0, 80.0), 110.0);
    }

    #[test]
    fn test_preview_x_clamps_to_edges() {
        assert_eq!(preview_x(10.0, 300.0, 80.0), 0.0);
        assert_eq!(preview_x(295.0, 300.0, 80.0), 220.0);
        assert_eq!(preview_x(-500.0, 300.0, 80.0), 0.0);
        assert_eq!(preview_x(5000.0, 300.0, 80.0), 220.0);
    }

    #[test]
    fn test_preview_x_frame_narrower_than_preview() {
        assert_eq!(preview_x(30.0, 60.0, 80.0), 0.0);
    }

    #[test]
    fn test_clamp_percent_nan() {
        assert_eq!(clamp_percent(f32::NAN), 0.0);
        assert_eq!(clamp_percent(f32::INFINITY), 100.0);
        assert_eq!(clamp_percent(f32::NEG_INFINITY), 0.0);
    }

    proptest! {
        #[test]
        fn prop_clamp_percent_in_range(v in -1.0e6f32..1.0e6f32) {
            let clamped = clamp_percent(v);
            prop_assert!((0.0..=PERCENT_MAX).contains(&clamped));
            if (0.0..=PERCENT_MAX).contains(&v) {
                prop_assert_eq!(clamped, v);
            }
        }

        #[test]
        fn prop_fill_width_monotonic(a in -200.0f32..200.0, b in -200.0f32..200.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_w = fill_width(lo, 300.0, 10.0);
            let hi_w = fill_width(hi, 300.0, 10.0);
            prop_assert!(lo_w <= hi_w);
            prop_assert!(lo_w >= 10.0);
            prop_assert!(hi_w <= 300.0);
        }

        #[test]
        fn prop_preview_within_track(x in -2000.0f32..2000.0, width in 80.0f32..2000.0) {
            let origin = preview_x(x, width, 80.0);
            prop_assert!(origin >= 0.0);
            prop_assert!(origin <= width - 80.0);
        }

        #[test]
        fn prop_progress_at_in_range(x in -2000.0f32..2000.0, width in 11.0f32..2000.0) {
            let p = progress_at(x, width, 10.0);
            prop_assert!((0.0..=PERCENT_MAX).contains(&p));
        }
    }
}
