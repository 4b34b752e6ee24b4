//! Render configuration: viewports, life slots and player preferences.
//!
//! Configuration is plain JSON. Every field has a default, so a partial file
//! (or `{}`) is valid:
//!
//! ```
//! use featherfall_render::config::HudConfig;
//!
//! let config = HudConfig::from_json_str(r#"{ "preferences": { "debug": true } }"#).unwrap();
//! assert!(config.preferences.debug);
//! assert_eq!(config.life_slots, 3);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ConfigError;

/// Largest extra-lives row the GUI lays out.
pub const MAX_LIFE_SLOTS: u32 = 16;

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// A viewport size in its own units (GUI pixels or world meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn validate(&self, viewport: &'static str) -> Result<(), ConfigError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidViewport {
                viewport,
                width: self.width,
                height: self.height,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// RenderPreferences
// ---------------------------------------------------------------------------

/// Player-facing toggles that change what a frame draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPreferences {
    /// Draw the physics debug overlay after everything else.
    pub debug: bool,
    /// Draw the FPS counter in the bottom-right corner.
    pub show_fps_counter: bool,
    /// Bind the monochrome post-process shader.
    pub use_monochrome_shader: bool,
}

impl Default for RenderPreferences {
    fn default() -> Self {
        Self {
            debug: false,
            show_fps_counter: true,
            use_monochrome_shader: false,
        }
    }
}

// ---------------------------------------------------------------------------
// HudConfig
// ---------------------------------------------------------------------------

/// Configuration for [`FrameRenderer`](crate::frame::FrameRenderer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// GUI camera viewport, in GUI pixels. The y axis points down.
    pub gui_viewport: Viewport,
    /// World camera viewport, in world units.
    pub world_viewport: Viewport,
    /// Number of life icons in the extra-lives row, `1..=MAX_LIFE_SLOTS`.
    pub life_slots: u32,
    pub preferences: RenderPreferences,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            gui_viewport: Viewport::new(800.0, 480.0),
            world_viewport: Viewport::new(4.0, 2.08),
            life_slots: 3,
            preferences: RenderPreferences::default(),
        }
    }
}

impl HudConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: HudConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            gui_width = config.gui_viewport.width,
            gui_height = config.gui_viewport.height,
            life_slots = config.life_slots,
            "loaded HUD config"
        );
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every invariant the renderer relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gui_viewport.validate("gui")?;
        self.world_viewport.validate("world")?;
        if self.life_slots == 0 {
            return Err(ConfigError::NoLifeSlots);
        }
        if self.life_slots > MAX_LIFE_SLOTS {
            return Err(ConfigError::TooManyLifeSlots {
                slots: self.life_slots,
                max: MAX_LIFE_SLOTS,
            });
        }
        Ok(())
    }
}
