//! FPS counter color bands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::Rgba;

/// Frames per second at or above which the counter is green.
pub const GOOD_FPS: u32 = 45;

/// Frames per second at or above which the counter is yellow.
pub const FAIR_FPS: u32 = 30;

/// Quality band of a measured frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FpsBand {
    Good,
    Fair,
    Poor,
}

impl FpsBand {
    /// Classify a frames-per-second sample.
    pub fn classify(fps: u32) -> Self {
        if fps >= GOOD_FPS {
            FpsBand::Good
        } else if fps >= FAIR_FPS {
            FpsBand::Fair
        } else {
            FpsBand::Poor
        }
    }

    /// Text color for the counter in this band.
    pub fn color(self) -> Rgba {
        match self {
            FpsBand::Good => Rgba::GREEN,
            FpsBand::Fair => Rgba::YELLOW,
            FpsBand::Poor => Rgba::RED,
        }
    }

    /// Counter text for a sample, e.g. `"FPS: 60"`.
    pub fn label(fps: u32) -> String {
        format!("FPS: {fps}")
    }
}

impl fmt::Display for FpsBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FpsBand::Good => "good",
            FpsBand::Fair => "fair",
            FpsBand::Poor => "poor",
        };
        f.write_str(name)
    }
}
