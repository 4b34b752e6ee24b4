//! Power-up icon blink near expiry.
//!
//! The feather icon is drawn steadily while the power-up has 4 or more
//! seconds left. During the final 4 seconds it toggles between full and half
//! opacity 5 times per second as a warning cue.

use serde::{Deserialize, Serialize};

/// Remaining time below which the icon starts blinking.
pub const BLINK_WARNING_SECONDS: f32 = 4.0;

/// Blink toggles per second during the warning window.
pub const BLINK_RATE_HZ: f32 = 5.0;

/// Alpha used on the "dim" half of a blink.
pub const BLINK_DIM_ALPHA: f32 = 0.5;

/// Visibility and opacity of the power-up icon for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlinkState {
    pub visible: bool,
    pub alpha: f32,
    /// Remaining time shown next to the icon, truncated to whole seconds.
    pub seconds_label: u32,
}

impl BlinkState {
    pub const HIDDEN: BlinkState = BlinkState {
        visible: false,
        alpha: 0.0,
        seconds_label: 0,
    };
}

/// Compute the power-up icon state for `time_left_seconds` of remaining
/// power-up duration.
pub fn compute_blink(time_left_seconds: f32) -> BlinkState {
    if time_left_seconds.is_nan() || time_left_seconds <= 0.0 {
        return BlinkState::HIDDEN;
    }

    let blink_on = time_left_seconds < BLINK_WARNING_SECONDS
        && ((time_left_seconds * BLINK_RATE_HZ).floor() as i64) % 2 != 0;

    BlinkState {
        visible: true,
        alpha: if blink_on { BLINK_DIM_ALPHA } else { 1.0 },
        seconds_label: time_left_seconds as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_without_powerup() {
        assert!(!compute_blink(0.0).visible);
        assert!(!compute_blink(-3.0).visible);
        assert!(!compute_blink(f32::NAN).visible);
    }

    #[test]
    fn blink_phases_in_warning_window() {
        // floor(16.5) = 16 -> even -> steady.
        assert_eq!(compute_blink(3.3).alpha, 1.0);
        // floor(17.5) = 17 -> odd -> dim.
        assert_eq!(compute_blink(3.5).alpha, 0.5);
    }

    #[test]
    fn steady_outside_warning_window() {
        for t in [4.0, 4.1, 4.3, 10.0, 59.9] {
            let state = compute_blink(t);
            assert!(state.visible);
            assert_eq!(state.alpha, 1.0, "t = {t}");
        }
    }

    #[test]
    fn label_truncates() {
        assert_eq!(compute_blink(3.99).seconds_label, 3);
        assert_eq!(compute_blink(0.2).seconds_label, 0);
        assert_eq!(compute_blink(12.7).seconds_label, 12);
    }
}
