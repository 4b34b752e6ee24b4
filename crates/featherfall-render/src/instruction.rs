//! Draw instructions: the plain-data boundary between the frame planner and
//! the host engine.
//!
//! Every instruction is an enumerated command the [`DrawSink`](crate::sink::DrawSink)
//! executes against its own camera, batch, shader and font APIs. Positions of
//! HUD instructions are in GUI space (y down); world-side instructions carry
//! no geometry because the engine owns the scene content.

use featherfall_hud::params::{DrawParams, Rgba};
use serde::{Deserialize, Serialize};

/// HUD sprite assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HudAsset {
    GoldCoin,
    PlayerHead,
    Feather,
}

/// HUD fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HudFont {
    /// Score digits.
    TextNormal,
    /// Power-up seconds label.
    TextSmall,
    /// FPS counter.
    DefaultNormal,
}

/// Tile-entity layers, drawn in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileLayer {
    Crates,
    Coins,
    Feathers,
    Zombies,
}

impl TileLayer {
    pub const ALL: [TileLayer; 4] = [
        TileLayer::Crates,
        TileLayer::Coins,
        TileLayer::Feathers,
        TileLayer::Zombies,
    ];
}

/// Dynamic object layers, drawn in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectLayer {
    Player,
    Clouds,
}

impl ObjectLayer {
    pub const ALL: [ObjectLayer; 2] = [ObjectLayer::Player, ObjectLayer::Clouds];
}

/// Post-process shader effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShaderEffect {
    /// Desaturate the frame; `amount` in `0.0..=1.0`.
    Monochrome { amount: f32 },
}

/// A sprite placed in GUI space.
///
/// `(x, y)` is the sprite's lower-left anchor; `origin` is the pivot used for
/// scaling and rotation, relative to the anchor; `width`/`height` is the
/// unscaled region size. Shake offsets in `params` move the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteDraw {
    pub asset: HudAsset,
    pub x: f32,
    pub y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
    pub params: DrawParams,
}

/// A text run placed in GUI space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDraw {
    pub font: HudFont,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: Rgba,
}

/// One command for the draw sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawInstruction {
    /// Center the world camera at `(x, y)` and update its projection.
    FollowCamera { x: f32, y: f32 },
    /// Render the tilemap through the world camera.
    TileMap,
    /// Draw every entity of a tile layer.
    Tiles(TileLayer),
    /// Draw a dynamic object layer.
    Objects(ObjectLayer),
    Sprite(SpriteDraw),
    Text(TextDraw),
    /// Let the game-over overlay advance and draw itself.
    GameOverOverlay { delta_seconds: f32 },
    /// Bind a post-process shader, or restore the default with `None`.
    SetShader(Option<ShaderEffect>),
    /// Draw physics body outlines through the world camera.
    PhysicsDebug,
}

impl DrawInstruction {
    /// The sprite payload, if this is a sprite instruction.
    pub fn as_sprite(&self) -> Option<&SpriteDraw> {
        match self {
            DrawInstruction::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }

    /// The text payload, if this is a text instruction.
    pub fn as_text(&self) -> Option<&TextDraw> {
        match self {
            DrawInstruction::Text(text) => Some(text),
            _ => None,
        }
    }
}
