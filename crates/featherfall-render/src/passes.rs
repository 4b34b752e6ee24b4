//! Render pass sequencing.
//!
//! A frame always runs the same five passes in a fixed order, with the
//! physics debug overlay appended when debugging is enabled:
//!
//! | # | Pass | Camera | Contents |
//! |---|------|--------|----------|
//! | 1 | World | world | camera follows the player, tilemap |
//! | 2 | Tiles | world | crates, coins, feathers, zombies |
//! | 3 | Objects | world | player, clouds |
//! | 4 | Gui | GUI | score, lives, FPS, game over, power-up |
//! | 5 | Shader | -- | post-process shader bind/reset |
//! | 6 | DebugPhysics | world | physics body outlines (debug only) |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RenderPreferences;

/// One pass of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderPass {
    World,
    Tiles,
    Objects,
    Gui,
    Shader,
    DebugPhysics,
}

impl RenderPass {
    /// Whether the pass draws through the world camera (as opposed to the
    /// GUI camera or no camera at all).
    pub fn uses_world_camera(self) -> bool {
        matches!(
            self,
            RenderPass::World | RenderPass::Tiles | RenderPass::Objects | RenderPass::DebugPhysics
        )
    }
}

impl fmt::Display for RenderPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderPass::World => "world",
            RenderPass::Tiles => "tiles",
            RenderPass::Objects => "objects",
            RenderPass::Gui => "gui",
            RenderPass::Shader => "shader",
            RenderPass::DebugPhysics => "debug_physics",
        };
        f.write_str(name)
    }
}

/// The ordered passes for a frame under `prefs`.
pub fn plan_passes(prefs: &RenderPreferences) -> Vec<RenderPass> {
    let mut passes = vec![
        RenderPass::World,
        RenderPass::Tiles,
        RenderPass::Objects,
        RenderPass::Gui,
        RenderPass::Shader,
    ];
    if prefs.debug {
        passes.push(RenderPass::DebugPhysics);
    }
    passes
}
