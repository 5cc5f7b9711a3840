//! Visibility projection: live angle → opacity and click eligibility.
//!
//! A panel facing the viewer (angle near 0°) is fully opaque; a panel on the
//! far side (near 180°) is hidden. Wide viewports fade across 40° ramps,
//! narrow viewports switch hard at 90°/270°. The active panel is always shown.

/// Viewports at or below this width use the hard cutoff.
pub const NARROW_VIEWPORT_PX: f32 = 768.0;

/// Background layer opacity relative to the foreground.
pub const BACKGROUND_SCALE: f32 = 0.7;

/// Panels at or below this opacity ignore clicks.
pub const INTERACTIVE_THRESHOLD: f32 = 0.1;

const FADE_OUT_START: f64 = 70.0;
const FADE_OUT_END: f64 = 110.0;
const FADE_IN_START: f64 = 250.0;
const FADE_IN_END: f64 = 290.0;
const FADE_SPAN: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    /// Prompt / foreground opacity in `[0, 1]`.
    pub opacity: f32,
    /// Background image opacity, always `opacity * 0.7`.
    pub background_opacity: f32,
    pub interactive: bool,
}

impl Visibility {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        background_opacity: 0.0,
        interactive: false,
    };

    pub fn from_opacity(opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            opacity,
            background_opacity: opacity * BACKGROUND_SCALE,
            interactive: opacity > INTERACTIVE_THRESHOLD,
        }
    }
}

/// Project one panel. `live_angle` is in degrees, `[0, 360)`.
pub fn project(live_angle: f64, active: bool, viewport_width: f32) -> Visibility {
    if active {
        return Visibility::from_opacity(1.0);
    }
    let opacity = if viewport_width <= NARROW_VIEWPORT_PX {
        cutoff_opacity(live_angle)
    } else {
        fade_opacity(live_angle)
    };
    Visibility::from_opacity(opacity)
}

/// Narrow-viewport rule: hidden across `[90, 270]`.
pub fn cutoff_opacity(angle: f64) -> f32 {
    if (90.0..=270.0).contains(&angle) {
        0.0
    } else {
        1.0
    }
}

/// Wide-viewport rule: piecewise-linear fade.
pub fn fade_opacity(angle: f64) -> f32 {
    let o = if angle < FADE_OUT_START || angle > FADE_IN_END {
        1.0
    } else if angle <= FADE_OUT_END {
        ((FADE_OUT_END - angle) / FADE_SPAN).max(0.0)
    } else if angle < FADE_IN_START {
        0.0
    } else {
        ((angle - FADE_IN_START) / FADE_SPAN).max(0.0)
    };
    o as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f32 = 1280.0;
    const NARROW: f32 = 390.0;

    fn angles() -> impl Iterator<Item = f64> {
        (0..3600).map(|i| i as f64 * 0.1)
    }

    #[test]
    fn opacity_always_in_unit_range() {
        for width in [320.0, 768.0, 769.0, 1024.0, 2560.0] {
            for a in angles() {
                for active in [false, true] {
                    let v = project(a, active, width);
                    assert!((0.0..=1.0).contains(&v.opacity), "{} at {}", v.opacity, a);
                    assert!((0.0..=BACKGROUND_SCALE).contains(&v.background_opacity));
                }
            }
        }
    }

    #[test]
    fn active_panel_is_never_faded() {
        for width in [NARROW, WIDE] {
            for a in angles() {
                let v = project(a, true, width);
                assert_eq!(v.opacity, 1.0);
                assert!((v.background_opacity - 0.7).abs() < 1e-6);
                assert!(v.interactive);
            }
        }
    }

    #[test]
    fn fade_out_ramp_exact_values() {
        assert_eq!(fade_opacity(70.0), 1.0);
        assert_eq!(fade_opacity(90.0), 0.5);
        assert_eq!(fade_opacity(110.0), 0.0);
    }

    #[test]
    fn fade_in_ramp_exact_values() {
        assert_eq!(fade_opacity(250.0), 0.0);
        assert_eq!(fade_opacity(270.0), 0.5);
        assert_eq!(fade_opacity(290.0), 1.0);
    }

    #[test]
    fn wide_viewport_regions() {
        assert_eq!(project(0.0, false, WIDE).opacity, 1.0);
        assert_eq!(project(69.9, false, WIDE).opacity, 1.0);
        assert_eq!(project(180.0, false, WIDE).opacity, 0.0);
        assert_eq!(project(300.0, false, WIDE).opacity, 1.0);
    }

    #[test]
    fn narrow_viewport_hard_cutoff() {
        assert_eq!(project(89.9, false, NARROW).opacity, 1.0);
        assert_eq!(project(90.0, false, NARROW).opacity, 0.0);
        assert_eq!(project(270.0, false, NARROW).opacity, 0.0);
        assert_eq!(project(270.1, false, NARROW).opacity, 1.0);
        // Breakpoint itself is narrow
        assert_eq!(project(100.0, false, 768.0).opacity, 0.0);
    }

    #[test]
    fn background_is_scaled_foreground() {
        let v = project(90.0, false, WIDE);
        assert!((v.background_opacity - 0.35).abs() < 1e-6);
    }

    #[test]
    fn dead_zone_blocks_clicks() {
        // (110 - 106) / 40 = 0.1, not strictly above the threshold
        assert!(!project(106.0, false, WIDE).interactive);
        assert!(project(105.0, false, WIDE).interactive);
        assert!(!project(180.0, false, WIDE).interactive);
    }
}
