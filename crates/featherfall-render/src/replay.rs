//! Frame recording and replay verification.
//!
//! A frame plan is a pure function of `(config, time, snapshot)`. The
//! recorder captures those inputs for a run of frames together with a BLAKE3
//! digest of each plan, producing a [`HudRecording`]. [`verify`] re-plans
//! every recorded frame and compares digests, so any hidden state or
//! nondeterminism in the HUD pipeline shows up as a divergence.
//!
//! # Recording
//!
//! ```
//! use featherfall_render::prelude::*;
//!
//! let renderer = FrameRenderer::new(HudConfig::default()).unwrap();
//! let mut recorder = HudRecorder::new(renderer.config().clone());
//!
//! for frame in 0..10u64 {
//!     let time = FrameTime { wall_clock_millis: frame * 16, delta_seconds: 0.016, fps: 60 };
//!     let snapshot = GameSnapshot { score: 10, score_visual: frame as f32, ..Default::default() };
//!     let plan = renderer.plan_frame(&time, &snapshot);
//!     recorder.record_frame(frame, time, snapshot, &plan).unwrap();
//! }
//!
//! let recording = recorder.finish();
//! let result = verify(&recording).expect("recording should be well-formed");
//! assert!(result.completed);
//! assert!(result.first_divergence.is_none());
//! ```

use std::collections::BTreeSet;

use featherfall_hud::clock::FrameTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::HudConfig;
use crate::frame::{FramePlan, FrameRenderer};
use crate::snapshot::GameSnapshot;

// ---------------------------------------------------------------------------
// HudRecording
// ---------------------------------------------------------------------------

/// A recorded run: the configuration and every frame's inputs and digest.
///
/// Fully serializable to JSON for storage or regression fixtures. JSON has
/// no encoding for NaN or infinity, so only frames with finite inputs can be
/// recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudRecording {
    pub config: HudConfig,
    pub frames: Vec<RecordedFrame>,
}

/// One recorded frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub frame: u64,
    pub time: FrameTime,
    pub snapshot: GameSnapshot,
    /// BLAKE3 hex digest of the frame's plan.
    pub digest: String,
}

// ---------------------------------------------------------------------------
// ReplayResult
// ---------------------------------------------------------------------------

/// The outcome of verifying a [`HudRecording`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayResult {
    /// Whether every recorded frame was re-planned without divergence.
    pub completed: bool,
    pub frames_replayed: u64,
    /// The first frame whose re-planned digest differs from the recording.
    pub first_divergence: Option<ReplayDivergence>,
}

/// Details about a frame whose plan no longer matches its recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayDivergence {
    pub frame: u64,
    pub expected_digest: String,
    pub actual_digest: String,
}

// ---------------------------------------------------------------------------
// HudRecorder
// ---------------------------------------------------------------------------

/// Records frames into a [`HudRecording`].
///
/// Frame numbers must be strictly increasing across calls to
/// [`record_frame`](Self::record_frame).
pub struct HudRecorder {
    recording: HudRecording,
    last_frame: Option<u64>,
}

impl HudRecorder {
    pub fn new(config: HudConfig) -> Self {
        Self {
            recording: HudRecording {
                config,
                frames: Vec::new(),
            },
            last_frame: None,
        }
    }

    /// Record one frame's inputs and the plan they produced.
    ///
    /// # Errors
    ///
    /// Returns an error, and records nothing, if the frame time or snapshot
    /// holds a NaN or infinite value.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is not strictly greater than the frame supplied in
    /// the previous call.
    pub fn record_frame(
        &mut self,
        frame: u64,
        time: FrameTime,
        snapshot: GameSnapshot,
        plan: &FramePlan,
    ) -> Result<(), anyhow::Error> {
        check_finite(frame, &time, &snapshot)?;
        if let Some(prev) = self.last_frame {
            assert!(
                frame > prev,
                "HudRecorder::record_frame: frame {frame} is not strictly greater than previous frame {prev}. \
                 Frames must be recorded in monotonically increasing order."
            );
        }
        self.last_frame = Some(frame);
        self.recording.frames.push(RecordedFrame {
            frame,
            time,
            snapshot,
            digest: plan.digest(),
        });
        Ok(())
    }

    /// Number of frames recorded so far.
    pub fn len(&self) -> usize {
        self.recording.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recording.frames.is_empty()
    }

    pub fn finish(self) -> HudRecording {
        self.recording
    }
}

// ---------------------------------------------------------------------------
// verify()
// ---------------------------------------------------------------------------

/// Re-plan every frame of `recording` and compare digests.
///
/// Stops at the first divergence.
///
/// # Errors
///
/// Returns an error if the recording is malformed: an invalid configuration,
/// a repeated frame number or a non-finite input.
pub fn verify(recording: &HudRecording) -> Result<ReplayResult, anyhow::Error> {
    let mut seen = BTreeSet::new();
    for entry in &recording.frames {
        check_finite(entry.frame, &entry.time, &entry.snapshot)?;
        if !seen.insert(entry.frame) {
            return Err(anyhow::anyhow!(
                "recording contains duplicate entry for frame {}",
                entry.frame
            ));
        }
    }

    let renderer = FrameRenderer::new(recording.config.clone())
        .map_err(|e| anyhow::anyhow!("recording has an invalid config: {e}"))?;

    let mut frames_replayed = 0;
    for entry in &recording.frames {
        let actual_digest = renderer.plan_frame(&entry.time, &entry.snapshot).digest();
        if actual_digest != entry.digest {
            warn!(
                frame = entry.frame,
                expected = %entry.digest,
                actual = %actual_digest,
                "HUD replay diverged"
            );
            return Ok(ReplayResult {
                completed: false,
                frames_replayed,
                first_divergence: Some(ReplayDivergence {
                    frame: entry.frame,
                    expected_digest: entry.digest.clone(),
                    actual_digest,
                }),
            });
        }
        frames_replayed += 1;
    }

    Ok(ReplayResult {
        completed: true,
        frames_replayed,
        first_divergence: None,
    })
}

fn check_finite(
    frame: u64,
    time: &FrameTime,
    snapshot: &GameSnapshot,
) -> Result<(), anyhow::Error> {
    if !time.delta_seconds.is_finite() {
        anyhow::bail!("frame {frame}: delta_seconds is not finite");
    }
    if let Some(field) = snapshot.non_finite_field() {
        anyhow::bail!("frame {frame}: snapshot field {field} is not finite");
    }
    Ok(())
}
