//! Per-frame animation input.

use serde::{Deserialize, Serialize};

/// The values every HUD animator reads for one frame.
///
/// Built fresh by the host each frame from the current clock sample and the
/// game-state snapshot, and never retained. The `*_visual` fields are the
/// caller's smoothed copies of the actual counters; how they decay toward
/// the actual values is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationInput {
    /// Wall-clock time in milliseconds, sampled once for the whole frame.
    pub wall_clock_millis: u64,
    /// The true score.
    pub score_actual: i64,
    /// The displayed score, counting up toward `score_actual`.
    pub score_visual: f32,
    /// The true remaining lives. May be negative once the game is over.
    pub lives_actual: i32,
    /// The displayed lives, decaying toward `lives_actual`.
    pub lives_visual: f32,
    /// Seconds of power-up left. Anything `<= 0` means no power-up.
    pub powerup_time_remaining: f32,
}

impl AnimationInput {
    /// Whether the displayed score is still catching up with the real one.
    pub fn score_counting(&self) -> bool {
        self.score_visual < self.score_actual as f32
    }

    /// Whether the power-up is active this frame.
    pub fn powerup_active(&self) -> bool {
        self.powerup_time_remaining > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_and_powerup_flags() {
        let mut input = AnimationInput {
            score_actual: 10,
            score_visual: 9.5,
            powerup_time_remaining: 0.0,
            ..Default::default()
        };
        assert!(input.score_counting());
        assert!(!input.powerup_active());

        input.score_visual = 10.0;
        input.powerup_time_remaining = 0.1;
        assert!(!input.score_counting());
        assert!(input.powerup_active());
    }

    #[test]
    fn serializes_to_json() {
        let input = AnimationInput {
            wall_clock_millis: 42,
            lives_actual: -1,
            ..Default::default()
        };
        let json = serde_json::to_string(&input).expect("should serialize to JSON");
        let back: AnimationInput = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, input);
    }
}
