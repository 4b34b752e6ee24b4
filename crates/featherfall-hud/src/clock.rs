//! Per-frame time sampling shared by every animator.
//!
//! The render loop samples an [`EasingClock`] exactly once per frame and
//! passes the resulting [`FrameTime`] to every consumer, so all HUD elements
//! in a frame agree on the time.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use featherfall_hud::clock::EasingClock;
//!
//! let mut clock = EasingClock::new();
//! for i in 0..=63u64 {
//!     let time = clock.sample_at(i * 16, Duration::from_millis(i * 16));
//!     assert_eq!(time.wall_clock_millis, i * 16);
//! }
//! // One full second has elapsed, so a frame rate is available.
//! assert!(clock.fps() > 0);
//! ```

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Length of an FPS measurement window.
const FPS_WINDOW: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// FrameTime
// ---------------------------------------------------------------------------

/// The time values read once for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Wall-clock time in milliseconds since the Unix epoch (or any fixed
    /// origin the host chooses).
    pub wall_clock_millis: u64,
    /// Seconds since the previous frame. Zero on the first frame.
    pub delta_seconds: f32,
    /// Frames counted during the last complete one-second window.
    pub fps: u32,
}

// ---------------------------------------------------------------------------
// EasingClock
// ---------------------------------------------------------------------------

/// Frame clock: wall-clock millis, frame delta, and a windowed FPS counter.
///
/// FPS is reported the way most game loops do it: frames are counted inside
/// a one-second window and the count becomes the reported value when the
/// window closes. Until the first window closes, FPS is zero.
#[derive(Debug, Clone)]
pub struct EasingClock {
    /// Monotonic origin used by [`sample`](Self::sample).
    origin: Instant,
    /// Monotonic time of the previous sample.
    last_sample: Option<Duration>,
    /// Monotonic time at which the current FPS window opened.
    window_start: Duration,
    /// Frames sampled in the current window.
    frames_in_window: u32,
    /// FPS from the last closed window.
    fps: u32,
}

impl EasingClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last_sample: None,
            window_start: Duration::ZERO,
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Sample the system clocks for this frame.
    pub fn sample(&mut self) -> FrameTime {
        let wall_clock_millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => since_epoch.as_millis() as u64,
            Err(e) => {
                warn!(error = %e, "system clock is before the Unix epoch; using 0");
                0
            }
        };
        let monotonic = self.origin.elapsed();
        self.sample_at(wall_clock_millis, monotonic)
    }

    /// Sample the clock with explicit readings.
    ///
    /// `monotonic` is any steadily increasing duration (for example time since
    /// the game started). A reading earlier than the previous one yields a
    /// zero delta instead of panicking.
    pub fn sample_at(&mut self, wall_clock_millis: u64, monotonic: Duration) -> FrameTime {
        let delta = match self.last_sample {
            Some(prev) => monotonic.checked_sub(prev).unwrap_or_else(|| {
                warn!(
                    previous_ms = prev.as_millis() as u64,
                    current_ms = monotonic.as_millis() as u64,
                    "monotonic clock went backwards; clamping frame delta to zero"
                );
                Duration::ZERO
            }),
            None => {
                self.window_start = monotonic;
                Duration::ZERO
            }
        };
        self.last_sample = Some(monotonic);

        if monotonic.saturating_sub(self.window_start) >= FPS_WINDOW {
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
            self.window_start = monotonic;
        }
        self.frames_in_window = self.frames_in_window.saturating_add(1);

        FrameTime {
            wall_clock_millis,
            delta_seconds: delta.as_secs_f32(),
            fps: self.fps,
        }
    }

    /// FPS from the last closed measurement window.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

impl Default for EasingClock {
    fn default() -> Self {
        Self::new()
    }
}
