//! Frame planning and submission.
//!
//! The [`FrameRenderer`] turns one clock sample and one game snapshot into a
//! [`FramePlan`] and hands it to a [`DrawSink`]. Planning is a pure function
//! of `(config, time, snapshot)`; submission only walks the plan.
//!
//! # Architecture
//!
//! The renderer does NOT own the game loop. Each frame the host:
//!
//! 1. Samples its [`EasingClock`](featherfall_hud::clock::EasingClock) once.
//! 2. Builds a [`GameSnapshot`] from its game state.
//! 3. Calls [`FrameRenderer::render_frame`] with its sink.

use featherfall_hud::clock::FrameTime;
use featherfall_hud::fps::FpsBand;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::HudConfig;
use crate::hud::compose_hud;
use crate::instruction::{DrawInstruction, ObjectLayer, ShaderEffect, TileLayer};
use crate::passes::{plan_passes, RenderPass};
use crate::sink::DrawSink;
use crate::snapshot::GameSnapshot;
use crate::ConfigError;

/// Uniform strength of the monochrome shader when enabled.
const MONOCHROME_AMOUNT: f32 = 1.0;

// ---------------------------------------------------------------------------
// FramePlan
// ---------------------------------------------------------------------------

/// The instructions of one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassPlan {
    pub pass: RenderPass,
    pub instructions: Vec<DrawInstruction>,
}

/// Everything one frame draws, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePlan {
    pub passes: Vec<PassPlan>,
}

impl FramePlan {
    /// Look up a pass by kind.
    pub fn pass(&self, pass: RenderPass) -> Option<&PassPlan> {
        self.passes.iter().find(|p| p.pass == pass)
    }

    /// Total instructions across all passes.
    pub fn instruction_count(&self) -> usize {
        self.passes.iter().map(|p| p.instructions.len()).sum()
    }

    /// BLAKE3 hex digest of the plan's canonical JSON encoding.
    ///
    /// Two plans with the same digest draw the same frame. JSON writes NaN
    /// and infinities as `null`, so plans built from non-finite inputs share
    /// digests; [`HudRecorder`](crate::replay::HudRecorder) refuses them.
    pub fn digest(&self) -> String {
        let json_bytes =
            serde_json::to_vec(self).expect("FramePlan should always be JSON-serializable");
        blake3::hash(&json_bytes).to_hex().to_string()
    }

    /// Walk the plan into `sink`.
    pub fn submit(&self, sink: &mut dyn DrawSink) {
        for plan in &self.passes {
            sink.begin_pass(plan.pass);
            for instruction in &plan.instructions {
                sink.draw(instruction);
            }
            sink.end_pass(plan.pass);
        }
    }
}

// ---------------------------------------------------------------------------
// FrameReport
// ---------------------------------------------------------------------------

/// Summary of a submitted frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Zero-based index of the frame within this renderer's lifetime.
    pub frame_index: u64,
    pub passes: usize,
    pub instructions: usize,
    pub fps_band: FpsBand,
}

// ---------------------------------------------------------------------------
// FrameRenderer
// ---------------------------------------------------------------------------

/// Plans frames and submits them to a sink.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    config: HudConfig,
    frames_rendered: u64,
    /// FPS band of the previous frame, for change logging only.
    last_band: Option<FpsBand>,
}

impl FrameRenderer {
    /// Create a renderer; fails if `config` does not validate.
    pub fn new(config: HudConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            frames_rendered: 0,
            last_band: None,
        })
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Number of frames submitted through [`render_frame`](Self::render_frame).
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Build the plan for one frame without submitting it.
    pub fn plan_frame(&self, time: &FrameTime, snapshot: &GameSnapshot) -> FramePlan {
        let passes = plan_passes(&self.config.preferences)
            .into_iter()
            .map(|pass| PassPlan {
                pass,
                instructions: self.pass_instructions(pass, time, snapshot),
            })
            .collect();
        FramePlan { passes }
    }

    /// Plan one frame and submit it to `sink`.
    pub fn render_frame(
        &mut self,
        time: &FrameTime,
        snapshot: &GameSnapshot,
        sink: &mut dyn DrawSink,
    ) -> FrameReport {
        let plan = self.plan_frame(time, snapshot);
        plan.submit(sink);

        let fps_band = FpsBand::classify(time.fps);
        if self.last_band != Some(fps_band) {
            debug!(
                frame = self.frames_rendered,
                fps = time.fps,
                band = %fps_band,
                "frame rate band changed"
            );
            self.last_band = Some(fps_band);
        }

        let report = FrameReport {
            frame_index: self.frames_rendered,
            passes: plan.passes.len(),
            instructions: plan.instruction_count(),
            fps_band,
        };
        trace!(
            frame = report.frame_index,
            passes = report.passes,
            instructions = report.instructions,
            delta = time.delta_seconds,
            "frame submitted"
        );
        self.frames_rendered += 1;
        report
    }

    fn pass_instructions(
        &self,
        pass: RenderPass,
        time: &FrameTime,
        snapshot: &GameSnapshot,
    ) -> Vec<DrawInstruction> {
        match pass {
            RenderPass::World => vec![
                DrawInstruction::FollowCamera {
                    x: snapshot.player_x,
                    y: self.config.world_viewport.height / 2.0,
                },
                DrawInstruction::TileMap,
            ],
            RenderPass::Tiles => TileLayer::ALL.into_iter().map(DrawInstruction::Tiles).collect(),
            RenderPass::Objects => ObjectLayer::ALL
                .into_iter()
                .map(DrawInstruction::Objects)
                .collect(),
            RenderPass::Gui => compose_hud(&self.config, time, snapshot),
            RenderPass::Shader => {
                let mut out = Vec::with_capacity(2);
                if self.config.preferences.use_monochrome_shader {
                    out.push(DrawInstruction::SetShader(Some(ShaderEffect::Monochrome {
                        amount: MONOCHROME_AMOUNT,
                    })));
                }
                out.push(DrawInstruction::SetShader(None));
                out
            }
            RenderPass::DebugPhysics => vec![DrawInstruction::PhysicsDebug],
        }
    }
}
