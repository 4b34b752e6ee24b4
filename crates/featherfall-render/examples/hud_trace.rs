//! Headless HUD session: simulates a short run of the platformer and prints
//! what the HUD asks the engine to draw.
//!
//! The game side (score pickups, damage, power-up pickups, and the smoothing
//! of the displayed score and lives) is a tiny seeded simulation living in
//! this example, not in the library.
//!
//! Run with: `RUST_LOG=featherfall_render=debug cargo run --example hud_trace`

use std::time::Duration;

use featherfall_render::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

const FRAMES: u64 = 600;
const FRAME_MS: u64 = 16;
const FEATHER_DURATION: f32 = 9.0;

/// Caller-owned game state, including the smoothed display values.
struct Session {
    snapshot: GameSnapshot,
    rng: Pcg64,
}

impl Session {
    fn new(seed: u64) -> Self {
        Self {
            snapshot: GameSnapshot {
                lives: 3,
                lives_visual: 3.0,
                ..Default::default()
            },
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    fn step(&mut self, dt: f32) {
        let s = &mut self.snapshot;

        if self.rng.gen_bool(0.02) {
            s.score += 100;
        }
        if s.lives >= 0 && self.rng.gen_bool(0.003) {
            s.lives -= 1;
            s.game_over = s.lives < 0;
        }
        if s.powerup_time_remaining <= 0.0 && self.rng.gen_bool(0.004) {
            s.powerup_time_remaining = FEATHER_DURATION;
        }

        s.player_x += dt * 1.2;
        s.powerup_time_remaining = (s.powerup_time_remaining - dt).max(0.0);

        // Displayed values chase the actual ones.
        if s.score_visual < s.score as f32 {
            s.score_visual = (s.score_visual + 250.0 * dt).min(s.score as f32);
        }
        let lives_floor = s.lives.max(0) as f32;
        if s.lives_visual > lives_floor {
            s.lives_visual = (s.lives_visual - 0.5 * dt).max(lives_floor);
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => HudConfig::load(path)?,
        None => HudConfig::default(),
    };

    let mut renderer = FrameRenderer::new(config.clone())?;
    let mut recorder = HudRecorder::new(config);
    let mut clock = EasingClock::new();
    let mut session = Session::new(7);
    let mut sink = RecordingSink::new();

    for frame in 0..FRAMES {
        let elapsed = Duration::from_millis(frame * FRAME_MS);
        let time = clock.sample_at(1_700_000_000_000 + frame * FRAME_MS, elapsed);
        session.step(time.delta_seconds);

        sink.clear();
        let plan = renderer.plan_frame(&time, &session.snapshot);
        recorder.record_frame(frame, time, session.snapshot, &plan)?;
        let report = renderer.render_frame(&time, &session.snapshot, &mut sink);

        if frame % 60 == 0 {
            let gui = sink.instructions(RenderPass::Gui).unwrap_or_default();
            println!(
                "frame {:>4}  fps {:>2} ({})  score {:>5}/{:<5}  lives {}/{:.2}  feather {:.1}s  gui instructions {}",
                report.frame_index,
                time.fps,
                report.fps_band,
                session.snapshot.score_visual as i64,
                session.snapshot.score,
                session.snapshot.lives,
                session.snapshot.lives_visual,
                session.snapshot.powerup_time_remaining,
                gui.len(),
            );
        }
    }

    let recording = recorder.finish();
    let result = verify(&recording)?;
    println!(
        "replayed {} frames, deterministic: {}",
        result.frames_replayed,
        result.first_divergence.is_none()
    );
    Ok(())
}
