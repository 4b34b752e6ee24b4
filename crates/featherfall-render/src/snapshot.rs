//! Read-only game state consumed by one frame.

use featherfall_hud::clock::FrameTime;
use featherfall_hud::input::AnimationInput;
use serde::{Deserialize, Serialize};

/// The game values a frame reads.
///
/// The snapshot is owned and updated by the game loop. The renderer never
/// mutates it, and the smoothing that drives `score_visual` and
/// `lives_visual` toward their actual values happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: i64,
    pub score_visual: f32,
    pub lives: i32,
    pub lives_visual: f32,
    /// Seconds of feather power-up left; `<= 0` when inactive.
    pub powerup_time_remaining: f32,
    /// Player body x in world units. The world camera follows it.
    pub player_x: f32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Combine this snapshot with the frame's time sample.
    pub fn animation_input(&self, time: &FrameTime) -> AnimationInput {
        AnimationInput {
            wall_clock_millis: time.wall_clock_millis,
            score_actual: self.score,
            score_visual: self.score_visual,
            lives_actual: self.lives,
            lives_visual: self.lives_visual,
            powerup_time_remaining: self.powerup_time_remaining,
        }
    }

    /// Name of the first float field that is NaN or infinite, if any.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("score_visual", self.score_visual),
            ("lives_visual", self.lives_visual),
            ("powerup_time_remaining", self.powerup_time_remaining),
            ("player_x", self.player_x),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }
}
