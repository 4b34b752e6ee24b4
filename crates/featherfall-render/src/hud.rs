//! HUD composition: animators plus layout, turned into draw instructions.
//!
//! [`compose_hud`] runs every HUD animator against one [`FrameTime`] and one
//! [`GameSnapshot`], anchors the results in GUI space and returns the GUI
//! pass instructions in draw order:
//!
//! 1. Score: gold coin (shaken while the score counts up) and the truncated
//!    displayed score. Anchored top-left.
//! 2. Extra lives: one head icon per slot, plus the losing overlay on the
//!    slot that was just lost. Anchored top-right.
//! 3. FPS counter, colored by band, when enabled. Anchored bottom-right.
//! 4. Game-over overlay when the game is over.
//! 5. Feather power-up icon and its seconds label while active, blinking
//!    near expiry. Anchored top-left, under the score.

use featherfall_hud::clock::FrameTime;
use featherfall_hud::fps::FpsBand;
use featherfall_hud::life_icon::{compute_life_row, BASE_ICON_SCALE};
use featherfall_hud::params::{DrawParams, Rgba};
use featherfall_hud::powerup_blink::compute_blink;
use featherfall_hud::score_shake::compute_shake;

use crate::config::HudConfig;
use crate::instruction::{DrawInstruction, HudAsset, HudFont, SpriteDraw, TextDraw};
use crate::snapshot::GameSnapshot;

// ---------------------------------------------------------------------------
// Layout constants (GUI pixels, y down)
// ---------------------------------------------------------------------------

/// Score coin anchor.
const SCORE_X: f32 = -15.0;
const SCORE_Y: f32 = -15.0;
/// Score coin pivot before shake is applied.
const SCORE_ORIGIN: f32 = 50.0;
const SCORE_SIZE: f32 = 100.0;
/// Score text position relative to the coin anchor.
const SCORE_TEXT_DX: f32 = 75.0;
const SCORE_TEXT_DY: f32 = 40.0;

/// Spacing between life icons, also the right margin of the row.
const LIFE_STEP: f32 = 50.0;
const LIFE_Y: f32 = -15.0;
const LIFE_ORIGIN: f32 = 50.0;
const LIFE_SIZE: f32 = 120.0;

/// FPS text inset from the right and bottom edges.
const FPS_INSET_X: f32 = 55.0;
const FPS_INSET_Y: f32 = 15.0;

const FEATHER_X: f32 = -15.0;
const FEATHER_Y: f32 = 30.0;
const FEATHER_ORIGIN: f32 = 50.0;
const FEATHER_SIZE: f32 = 100.0;
const FEATHER_TEXT_DX: f32 = 60.0;
const FEATHER_TEXT_DY: f32 = 57.0;

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose the GUI pass for one frame.
pub fn compose_hud(
    config: &HudConfig,
    time: &FrameTime,
    snapshot: &GameSnapshot,
) -> Vec<DrawInstruction> {
    let input = snapshot.animation_input(time);
    let mut out = Vec::with_capacity(8 + 2 * config.life_slots as usize);

    // Score.
    let shake = compute_shake(input.wall_clock_millis, input.score_actual, input.score_visual);
    out.push(DrawInstruction::Sprite(SpriteDraw {
        asset: HudAsset::GoldCoin,
        x: SCORE_X,
        y: SCORE_Y,
        origin_x: SCORE_ORIGIN,
        origin_y: SCORE_ORIGIN,
        width: SCORE_SIZE,
        height: SCORE_SIZE,
        params: DrawParams::scaled(BASE_ICON_SCALE).with_offset(shake.offset_x, shake.offset_y),
    }));
    out.push(DrawInstruction::Text(TextDraw {
        font: HudFont::TextNormal,
        text: (input.score_visual as i64).to_string(),
        x: SCORE_X + SCORE_TEXT_DX,
        y: SCORE_Y + SCORE_TEXT_DY,
        color: Rgba::WHITE,
    }));

    // Extra lives.
    let row_x = config.gui_viewport.width - LIFE_STEP - config.life_slots as f32 * LIFE_STEP;
    let icons = compute_life_row(config.life_slots, input.lives_actual, input.lives_visual);
    for (i, icon) in icons.iter().enumerate() {
        let head = |params: DrawParams| {
            DrawInstruction::Sprite(SpriteDraw {
                asset: HudAsset::PlayerHead,
                x: row_x + i as f32 * LIFE_STEP,
                y: LIFE_Y,
                origin_x: LIFE_ORIGIN,
                origin_y: LIFE_ORIGIN,
                width: LIFE_SIZE,
                height: LIFE_SIZE,
                params,
            })
        };
        out.push(head(*icon.base()));
        if let Some(overlay) = icon.overlay() {
            out.push(head(*overlay));
        }
    }

    // FPS counter.
    if config.preferences.show_fps_counter {
        out.push(DrawInstruction::Text(TextDraw {
            font: HudFont::DefaultNormal,
            text: FpsBand::label(time.fps),
            x: config.gui_viewport.width - FPS_INSET_X,
            y: config.gui_viewport.height - FPS_INSET_Y,
            color: FpsBand::classify(time.fps).color(),
        }));
    }

    // Game over.
    if snapshot.game_over {
        out.push(DrawInstruction::GameOverOverlay {
            delta_seconds: time.delta_seconds,
        });
    }

    // Feather power-up.
    let blink = compute_blink(input.powerup_time_remaining);
    if blink.visible {
        out.push(DrawInstruction::Sprite(SpriteDraw {
            asset: HudAsset::Feather,
            x: FEATHER_X,
            y: FEATHER_Y,
            origin_x: FEATHER_ORIGIN,
            origin_y: FEATHER_ORIGIN,
            width: FEATHER_SIZE,
            height: FEATHER_SIZE,
            params: DrawParams::scaled(BASE_ICON_SCALE)
                .with_color(Rgba::WHITE.with_alpha(blink.alpha)),
        }));
        out.push(DrawInstruction::Text(TextDraw {
            font: HudFont::TextSmall,
            text: blink.seconds_label.to_string(),
            x: FEATHER_X + FEATHER_TEXT_DX,
            y: FEATHER_Y + FEATHER_TEXT_DY,
            color: Rgba::WHITE,
        }));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(millis: u64, fps: u32) -> FrameTime {
        FrameTime {
            wall_clock_millis: millis,
            delta_seconds: 1.0 / 60.0,
            fps,
        }
    }

    fn calm_snapshot() -> GameSnapshot {
        GameSnapshot {
            score: 12,
            score_visual: 12.0,
            lives: 3,
            lives_visual: 3.0,
            ..Default::default()
        }
    }

    #[test]
    fn calm_hud_layout() {
        let config = HudConfig::default();
        let out = compose_hud(&config, &time(500, 60), &calm_snapshot());

        // coin, score text, 3 heads, fps text
        assert_eq!(out.len(), 6);

        let coin = out[0].as_sprite().expect("coin sprite first");
        assert_eq!(coin.asset, HudAsset::GoldCoin);
        assert_eq!((coin.x, coin.y), (-15.0, -15.0));
        assert_eq!((coin.origin_x, coin.origin_y), (50.0, 50.0));

        let score = out[1].as_text().expect("score text second");
        assert_eq!(score.text, "12");
        assert_eq!((score.x, score.y), (60.0, 25.0));

        // Row starts at 800 - 50 - 3 * 50 = 600.
        let xs: Vec<f32> = out[2..5]
            .iter()
            .map(|i| i.as_sprite().expect("head sprite").x)
            .collect();
        assert_eq!(xs, vec![600.0, 650.0, 700.0]);

        let fps = out[5].as_text().expect("fps text last");
        assert_eq!(fps.text, "FPS: 60");
        assert_eq!(fps.color, Rgba::GREEN);
        assert_eq!((fps.x, fps.y), (745.0, 465.0));
    }

    #[test]
    fn score_text_truncates_visual_score() {
        let snapshot = GameSnapshot {
            score: 100,
            score_visual: 41.9,
            ..calm_snapshot()
        };
        let out = compose_hud(&HudConfig::default(), &time(10, 60), &snapshot);
        assert_eq!(out[1].as_text().map(|t| t.text.as_str()), Some("41"));
    }

    #[test]
    fn shake_rides_on_coin_params() {
        let snapshot = GameSnapshot {
            score: 100,
            score_visual: 50.0,
            ..calm_snapshot()
        };
        let out = compose_hud(&HudConfig::default(), &time(50, 60), &snapshot);
        let coin = out[0].as_sprite().expect("coin sprite");
        assert_eq!((coin.origin_x, coin.origin_y), (50.0, 50.0));
        assert!(coin.params.offset_x != 0.0);
        assert!(coin.params.offset_x.abs() <= 1.5);
        assert!(coin.params.offset_y.abs() <= 1.5);
    }

    #[test]
    fn losing_overlay_follows_its_base_icon() {
        let snapshot = GameSnapshot {
            lives: 2,
            lives_visual: 2.6,
            ..calm_snapshot()
        };
        let out = compose_hud(&HudConfig::default(), &time(0, 60), &snapshot);
        let heads: Vec<&SpriteDraw> = out
            .iter()
            .filter_map(DrawInstruction::as_sprite)
            .filter(|s| s.asset == HudAsset::PlayerHead)
            .collect();
        assert_eq!(heads.len(), 4);
        assert_eq!(heads[2].x, heads[3].x);
        assert_eq!(heads[2].params.color.a, 0.5);
        assert!((heads[3].params.rotation_degrees + 4.5).abs() < 1e-4);
    }

    #[test]
    fn fps_counter_can_be_hidden() {
        let mut config = HudConfig::default();
        config.preferences.show_fps_counter = false;
        let out = compose_hud(&config, &time(0, 20), &calm_snapshot());
        assert!(out
            .iter()
            .filter_map(DrawInstruction::as_text)
            .all(|t| !t.text.starts_with("FPS")));
    }

    #[test]
    fn game_over_and_feather() {
        let snapshot = GameSnapshot {
            game_over: true,
            powerup_time_remaining: 3.5,
            ..calm_snapshot()
        };
        let out = compose_hud(&HudConfig::default(), &time(0, 30), &snapshot);
        let n = out.len();
        assert!(matches!(out[n - 3], DrawInstruction::GameOverOverlay { .. }));
        let feather = out[n - 2].as_sprite().expect("feather sprite");
        assert_eq!(feather.asset, HudAsset::Feather);
        assert_eq!(feather.params.color.a, 0.5);
        let label = out[n - 1].as_text().expect("feather label");
        assert_eq!(label.text, "3");
        assert_eq!((label.x, label.y), (45.0, 87.0));
    }
}
