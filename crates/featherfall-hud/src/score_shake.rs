//! Score coin shake while the displayed score counts up.
//!
//! The coin icon next to the score jitters for as long as the displayed
//! score trails the real one. The jitter is two sine waves over the same
//! phase with different frequency multipliers, so the path never settles
//! into a plain circle.

use serde::{Deserialize, Serialize};

/// Maximum shake distance in GUI units along either axis.
pub const SHAKE_AMPLITUDE: f32 = 1.5;

/// Frequency multiplier for the horizontal axis.
pub const SHAKE_FREQ_X: f32 = 2.2;

/// Frequency multiplier for the vertical axis.
pub const SHAKE_FREQ_Y: f32 = 2.9;

/// Offset applied to the score icon's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShakeOffset {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ShakeOffset {
    pub const ZERO: ShakeOffset = ShakeOffset {
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        self.offset_x == 0.0 && self.offset_y == 0.0
    }
}

/// Compute the score icon shake for this frame.
///
/// Shaking is active only while `score_visual < score_actual`. The phase is
/// `wall_clock_millis mod 360`, read as degrees.
pub fn compute_shake(wall_clock_millis: u64, score_actual: i64, score_visual: f32) -> ShakeOffset {
    if score_visual >= score_actual as f32 {
        return ShakeOffset::ZERO;
    }

    let phase = (wall_clock_millis % 360) as f32;
    ShakeOffset {
        offset_x: sin_deg(phase * SHAKE_FREQ_X) * SHAKE_AMPLITUDE,
        offset_y: sin_deg(phase * SHAKE_FREQ_Y) * SHAKE_AMPLITUDE,
    }
}

fn sin_deg(degrees: f32) -> f32 {
    degrees.to_radians().sin()
}
