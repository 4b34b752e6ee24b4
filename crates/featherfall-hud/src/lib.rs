//! Featherfall HUD -- pure, time-driven animation state for HUD overlays.
//!
//! Every animator in this crate is a closed-form function of the values
//! handed to it for the current frame. None of them keep state between
//! frames: the "memory" of a HUD transition (a score still counting up, a
//! life icon still fading out) lives in the caller's smoothed *visual*
//! values, which trail the actual game counters.
//!
//! The crate produces plain [`DrawParams`](params::DrawParams) records. It
//! never draws anything; an external renderer consumes the records.
//!
//! # Quick Start
//!
//! ```
//! use featherfall_hud::prelude::*;
//!
//! let input = AnimationInput {
//!     wall_clock_millis: 1_000,
//!     score_actual: 150,
//!     score_visual: 120.0,
//!     lives_actual: 2,
//!     lives_visual: 2.6,
//!     powerup_time_remaining: 3.5,
//! };
//!
//! let shake = compute_shake(input.wall_clock_millis, input.score_actual, input.score_visual);
//! assert!(shake.offset_x.abs() <= SHAKE_AMPLITUDE);
//!
//! let icons = compute_life_row(3, input.lives_actual, input.lives_visual);
//! assert!(matches!(icons[2], LifeIcon::LosingOverlay { .. }));
//!
//! let blink = compute_blink(input.powerup_time_remaining);
//! assert_eq!(blink.alpha, 0.5);
//!
//! assert_eq!(FpsBand::classify(44), FpsBand::Fair);
//! ```

#![deny(unsafe_code)]

pub mod clock;
pub mod fps;
pub mod input;
pub mod life_icon;
pub mod params;
pub mod powerup_blink;
pub mod score_shake;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::clock::{EasingClock, FrameTime};
    pub use crate::fps::FpsBand;
    pub use crate::input::AnimationInput;
    pub use crate::life_icon::{
        compute_life_icon, compute_life_row, LifeIcon, BASE_ICON_SCALE, DEPLETED_COLOR,
        LOSING_TINT,
    };
    pub use crate::params::{DrawParams, Rgba};
    pub use crate::powerup_blink::{compute_blink, BlinkState, BLINK_WARNING_SECONDS};
    pub use crate::score_shake::{compute_shake, ShakeOffset, SHAKE_AMPLITUDE};
}
