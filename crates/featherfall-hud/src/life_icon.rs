//! Extra-life icon row, including the "life being lost" transition.
//!
//! Each life slot renders one of three ways:
//!
//! | Slot state | Condition | Rendering |
//! |------------|-----------|-----------|
//! | Full | `index < lives_actual` | white, base scale |
//! | Depleted | `index >= lives_actual` | grey at half opacity, base scale |
//! | Losing | `index == lives_actual`, `lives_actual >= 0`, `lives_visual > lives_actual` | depleted base plus a reddish overlay that shrinks, rotates and fades |
//!
//! The overlay parameters are a pure mapping of the gap between
//! `lives_visual` and `lives_actual`. As the caller decays `lives_visual`
//! toward `lives_actual` the overlay fades out; once the gap closes the slot
//! is plain Depleted again.

use serde::{Deserialize, Serialize};

use crate::params::{DrawParams, Rgba};

/// Native scale of a life icon.
pub const BASE_ICON_SCALE: f32 = 0.35;

/// Tint applied to slots whose life is gone.
pub const DEPLETED_COLOR: Rgba = Rgba::new(0.5, 0.5, 0.5, 0.5);

/// RGB tint of the losing overlay; alpha is computed per frame.
pub const LOSING_TINT: Rgba = Rgba::new(1.0, 0.7, 0.7, 1.0);

/// Degrees of rotation per unit of overlay alpha.
const LOSING_ROTATION_PER_ALPHA: f32 = -45.0;

// ---------------------------------------------------------------------------
// LifeIcon
// ---------------------------------------------------------------------------

/// What to draw for one life slot.
///
/// The draw sink only ever receives one of these variants; it never has to
/// look at the raw counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LifeIcon {
    /// The life is still available.
    Full(DrawParams),
    /// The life is gone.
    Depleted(DrawParams),
    /// The life was just lost: draw `base` (depleted), then `overlay` on top.
    LosingOverlay {
        base: DrawParams,
        overlay: DrawParams,
    },
}

impl LifeIcon {
    /// The params for the slot's base rendering.
    pub fn base(&self) -> &DrawParams {
        match self {
            LifeIcon::Full(p) | LifeIcon::Depleted(p) => p,
            LifeIcon::LosingOverlay { base, .. } => base,
        }
    }

    /// The losing-transition overlay, if this slot has one.
    pub fn overlay(&self) -> Option<&DrawParams> {
        match self {
            LifeIcon::LosingOverlay { overlay, .. } => Some(overlay),
            _ => None,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, LifeIcon::Full(_))
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

fn full_params() -> DrawParams {
    DrawParams::scaled(BASE_ICON_SCALE)
}

fn depleted_params() -> DrawParams {
    DrawParams::scaled(BASE_ICON_SCALE).with_color(DEPLETED_COLOR)
}

/// Overlay for the slot whose life is being lost.
///
/// `alpha_scale` is not clamped: a gap close to 2 lives drives it toward
/// zero and a larger gap makes it negative, mirroring the icon. The color
/// alpha is clamped to `[0, 1]`; rotation uses the raw value.
fn losing_overlay(lives_actual: i32, lives_visual: f32) -> DrawParams {
    let actual = lives_actual as f32;
    let alpha_color = (lives_visual - actual - 0.5).max(0.0);
    let alpha_scale = BASE_ICON_SCALE * (2.0 + actual - lives_visual) * 2.0;

    DrawParams::scaled(alpha_scale)
        .with_rotation(LOSING_ROTATION_PER_ALPHA * alpha_color)
        .with_color(LOSING_TINT.with_alpha(alpha_color.min(1.0)))
}

/// Compute the rendering for life slot `index`.
///
/// Total over all inputs: negative `lives_actual` simply makes every slot
/// Depleted and never produces a losing overlay.
pub fn compute_life_icon(index: u32, lives_actual: i32, lives_visual: f32) -> LifeIcon {
    let index = i64::from(index);
    let actual = i64::from(lives_actual);

    if index < actual {
        return LifeIcon::Full(full_params());
    }

    let losing = lives_actual >= 0 && index == actual && lives_visual > lives_actual as f32;
    if losing {
        LifeIcon::LosingOverlay {
            base: depleted_params(),
            overlay: losing_overlay(lives_actual, lives_visual),
        }
    } else {
        LifeIcon::Depleted(depleted_params())
    }
}

/// Compute the rendering for every slot in `0..total_slots`.
pub fn compute_life_row(total_slots: u32, lives_actual: i32, lives_visual: f32) -> Vec<LifeIcon> {
    (0..total_slots)
        .map(|i| compute_life_icon(i, lives_actual, lives_visual))
        .collect()
}
