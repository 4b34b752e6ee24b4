//! Draw parameter records handed to the external renderer.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// An RGBA color with each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque white: the untinted sprite color.
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Return this color with its alpha channel replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// The channels as an array, in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

// ---------------------------------------------------------------------------
// DrawParams
// ---------------------------------------------------------------------------

/// Visual parameters for one HUD element in one frame.
///
/// `DrawParams` has no identity and no lifecycle beyond the frame it was
/// computed for. Offsets are in GUI distance units relative to the element's
/// anchor; scale is a multiplier on the sprite's native size; rotation is in
/// degrees, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawParams {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation_degrees: f32,
    pub color: Rgba,
    pub visible: bool,
}

impl DrawParams {
    /// Untransformed, untinted, visible.
    pub const IDENTITY: DrawParams = DrawParams {
        offset_x: 0.0,
        offset_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotation_degrees: 0.0,
        color: Rgba::WHITE,
        visible: true,
    };

    /// Not drawn at all.
    pub const HIDDEN: DrawParams = DrawParams {
        visible: false,
        ..DrawParams::IDENTITY
    };

    /// Identity params with a uniform scale.
    pub const fn scaled(scale: f32) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            ..Self::IDENTITY
        }
    }

    pub const fn with_color(self, color: Rgba) -> Self {
        Self { color, ..self }
    }

    pub const fn with_offset(self, offset_x: f32, offset_y: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            ..self
        }
    }

    pub const fn with_rotation(self, rotation_degrees: f32) -> Self {
        Self {
            rotation_degrees,
            ..self
        }
    }
}

impl Default for DrawParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}
