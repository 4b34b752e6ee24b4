//! Featherfall Render -- per-frame draw orchestration for the platformer.
//!
//! This crate builds on [`featherfall_hud`] to sequence a frame: world and
//! tilemap, tile entities, dynamic objects, HUD overlays, the post-process
//! shader pass and the optional physics debug overlay. It never touches a
//! graphics API. Instead it produces a [`FramePlan`](frame::FramePlan), an
//! ordered list of passes and plain-data [`DrawInstruction`]s, and feeds it
//! to a [`DrawSink`](sink::DrawSink) implemented by the host engine.
//!
//! # Quick Start
//!
//! ```
//! use featherfall_render::prelude::*;
//!
//! let mut renderer = FrameRenderer::new(HudConfig::default()).unwrap();
//! let mut sink = RecordingSink::new();
//!
//! let time = FrameTime { wall_clock_millis: 1_000, delta_seconds: 1.0 / 60.0, fps: 60 };
//! let snapshot = GameSnapshot {
//!     score: 40,
//!     score_visual: 35.0,
//!     lives: 3,
//!     lives_visual: 3.0,
//!     ..Default::default()
//! };
//!
//! let report = renderer.render_frame(&time, &snapshot, &mut sink);
//! assert_eq!(report.fps_band, FpsBand::Good);
//! assert_eq!(sink.passes()[0].0, RenderPass::World);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod frame;
pub mod hud;
pub mod instruction;
pub mod passes;
pub mod replay;
pub mod sink;
pub mod snapshot;

/// Re-export the HUD animation crate for convenience.
pub use featherfall_hud;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while loading or validating render configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for [`HudConfig`](config::HudConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A viewport dimension is zero, negative, or not finite.
    #[error("invalid {viewport} viewport {width}x{height}: dimensions must be positive and finite")]
    InvalidViewport {
        viewport: &'static str,
        width: f32,
        height: f32,
    },

    /// The HUD needs at least one life slot.
    #[error("life_slots must be at least 1")]
    NoLifeSlots,

    /// The extra-lives row is longer than the GUI can lay out.
    #[error("life_slots is {slots}, at most {max} are supported")]
    TooManyLifeSlots { slots: u32, max: u32 },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use featherfall_hud::prelude::*;

    pub use crate::config::{HudConfig, RenderPreferences, Viewport, MAX_LIFE_SLOTS};
    pub use crate::frame::{FramePlan, FrameRenderer, FrameReport, PassPlan};
    pub use crate::hud::compose_hud;
    pub use crate::instruction::{
        DrawInstruction, HudAsset, HudFont, ObjectLayer, ShaderEffect, SpriteDraw, TextDraw,
        TileLayer,
    };
    pub use crate::passes::{plan_passes, RenderPass};
    pub use crate::replay::{
        verify, HudRecorder, HudRecording, RecordedFrame, ReplayDivergence, ReplayResult,
    };
    pub use crate::sink::{DrawSink, RecordingSink};
    pub use crate::snapshot::GameSnapshot;
    pub use crate::ConfigError;
}
