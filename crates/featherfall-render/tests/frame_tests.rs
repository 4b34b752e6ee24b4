//! End-to-end frame tests.
//!
//! These tests drive the [`FrameRenderer`] through a [`RecordingSink`] and
//! check the full pass sequence and the HUD contents a host engine would
//! receive. No graphics context is involved.

use featherfall_render::prelude::*;

fn frame_time(millis: u64, fps: u32) -> FrameTime {
    FrameTime {
        wall_clock_millis: millis,
        delta_seconds: 1.0 / 60.0,
        fps,
    }
}

fn playing() -> GameSnapshot {
    GameSnapshot {
        score: 250,
        score_visual: 250.0,
        lives: 3,
        lives_visual: 3.0,
        powerup_time_remaining: 0.0,
        player_x: 2.0,
        game_over: false,
    }
}

fn heads(instructions: &[DrawInstruction]) -> Vec<&SpriteDraw> {
    instructions
        .iter()
        .filter_map(DrawInstruction::as_sprite)
        .filter(|s| s.asset == HudAsset::PlayerHead)
        .collect()
}

// ---------------------------------------------------------------------------
// Pass sequencing
// ---------------------------------------------------------------------------

#[test]
fn passes_run_in_fixed_order() {
    let mut renderer = FrameRenderer::new(HudConfig::default()).unwrap();
    let mut sink = RecordingSink::new();
    renderer.render_frame(&frame_time(0, 60), &playing(), &mut sink);

    let order: Vec<RenderPass> = sink.passes().iter().map(|(p, _)| *p).collect();
    assert_eq!(
        order,
        vec![
            RenderPass::World,
            RenderPass::Tiles,
            RenderPass::Objects,
            RenderPass::Gui,
            RenderPass::Shader,
        ]
    );
}

#[test]
fn debug_preference_adds_physics_overlay_last() {
    let mut config = HudConfig::default();
    config.preferences.debug = true;
    let mut renderer = FrameRenderer::new(config).unwrap();
    let mut sink = RecordingSink::new();
    renderer.render_frame(&frame_time(0, 60), &playing(), &mut sink);

    let (last_pass, last_instructions) = sink.passes().last().expect("at least one pass");
    assert_eq!(*last_pass, RenderPass::DebugPhysics);
    assert_eq!(last_instructions, &vec![DrawInstruction::PhysicsDebug]);
}

#[test]
fn tile_and_object_layers_in_draw_order() {
    let renderer = FrameRenderer::new(HudConfig::default()).unwrap();
    let plan = renderer.plan_frame(&frame_time(0, 60), &playing());

    let tiles = &plan.pass(RenderPass::Tiles).expect("tiles pass").instructions;
    assert_eq!(
        tiles,
        &vec![
            DrawInstruction::Tiles(TileLayer::Crates),
            DrawInstruction::Tiles(TileLayer::Coins),
            DrawInstruction::Tiles(TileLayer::Feathers),
            DrawInstruction::Tiles(TileLayer::Zombies),
        ]
    );

    let objects = &plan.pass(RenderPass::Objects).expect("objects pass").instructions;
    assert_eq!(
        objects,
        &vec![
            DrawInstruction::Objects(ObjectLayer::Player),
            DrawInstruction::Objects(ObjectLayer::Clouds),
        ]
    );
}

// ---------------------------------------------------------------------------
// HUD contents
// ---------------------------------------------------------------------------

#[test]
fn losing_a_life_shows_one_overlay_that_fades_out() {
    let renderer = FrameRenderer::new(HudConfig::default()).unwrap();

    // The caller decays lives_visual from 3.0 toward 2; the overlay alpha
    // should never increase as the gap closes.
    let mut last_alpha = f32::INFINITY;
    for step in 0..=10 {
        let visual = 3.0 - step as f32 * 0.1;
        let snapshot = GameSnapshot {
            lives: 2,
            lives_visual: visual,
            ..playing()
        };
        let plan = renderer.plan_frame(&frame_time(step * 16, 60), &snapshot);
        let gui = &plan.pass(RenderPass::Gui).expect("gui pass").instructions;
        let heads = heads(gui);

        if visual > 2.0 {
            assert_eq!(heads.len(), 4, "3 base icons + 1 overlay at visual {visual}");
            let overlay = heads[3];
            assert_eq!(overlay.x, heads[2].x);
            assert!(overlay.params.color.a <= last_alpha);
            last_alpha = overlay.params.color.a;
        } else {
            assert_eq!(heads.len(), 3, "no overlay once the gap closes");
        }
    }
}

#[test]
fn game_over_hides_every_life() {
    let renderer = FrameRenderer::new(HudConfig::default()).unwrap();
    let snapshot = GameSnapshot {
        lives: -1,
        lives_visual: 0.0,
        game_over: true,
        ..playing()
    };
    let plan = renderer.plan_frame(&frame_time(0, 60), &snapshot);
    let gui = &plan.pass(RenderPass::Gui).expect("gui pass").instructions;

    let heads = heads(gui);
    assert_eq!(heads.len(), 3);
    assert!(heads.iter().all(|h| h.params.color.a == 0.5));
    assert!(gui
        .iter()
        .any(|i| matches!(i, DrawInstruction::GameOverOverlay { .. })));
}

#[test]
fn fps_counter_color_tracks_band() {
    let renderer = FrameRenderer::new(HudConfig::default()).unwrap();
    for (fps, color) in [(60, Rgba::GREEN), (35, Rgba::YELLOW), (12, Rgba::RED)] {
        let plan = renderer.plan_frame(&frame_time(0, fps), &playing());
        let gui = &plan.pass(RenderPass::Gui).expect("gui pass").instructions;
        let counter = gui
            .iter()
            .filter_map(DrawInstruction::as_text)
            .find(|t| t.font == HudFont::DefaultNormal)
            .expect("fps counter present");
        assert_eq!(counter.color, color, "fps {fps}");
        assert_eq!(counter.text, format!("FPS: {fps}"));
    }
}

#[test]
fn feather_absent_without_powerup() {
    let renderer = FrameRenderer::new(HudConfig::default()).unwrap();
    let plan = renderer.plan_frame(&frame_time(0, 60), &playing());
    let gui = &plan.pass(RenderPass::Gui).expect("gui pass").instructions;
    assert!(gui
        .iter()
        .filter_map(DrawInstruction::as_sprite)
        .all(|s| s.asset != HudAsset::Feather));
}

#[test]
fn feather_blinks_in_final_seconds() {
    let renderer = FrameRenderer::new(HudConfig::default()).unwrap();
    let alpha_at = |t: f32| {
        let snapshot = GameSnapshot {
            powerup_time_remaining: t,
            ..playing()
        };
        let plan = renderer.plan_frame(&frame_time(0, 60), &snapshot);
        plan.pass(RenderPass::Gui)
            .expect("gui pass")
            .instructions
            .iter()
            .filter_map(DrawInstruction::as_sprite)
            .find(|s| s.asset == HudAsset::Feather)
            .map(|s| s.params.color.a)
    };

    assert_eq!(alpha_at(8.0), Some(1.0));
    assert_eq!(alpha_at(3.3), Some(1.0));
    assert_eq!(alpha_at(3.5), Some(0.5));
    assert_eq!(alpha_at(0.0), None);
}

#[test]
fn wider_gui_moves_life_row() {
    let config = HudConfig {
        gui_viewport: Viewport::new(1024.0, 480.0),
        life_slots: 5,
        ..Default::default()
    };
    let renderer = FrameRenderer::new(config).unwrap();
    let snapshot = GameSnapshot {
        lives: 5,
        lives_visual: 5.0,
        ..playing()
    };
    let plan = renderer.plan_frame(&frame_time(0, 60), &snapshot);
    let gui = &plan.pass(RenderPass::Gui).expect("gui pass").instructions;
    let xs: Vec<f32> = heads(gui).iter().map(|h| h.x).collect();
    // 1024 - 50 - 5 * 50 = 724
    assert_eq!(xs, vec![724.0, 774.0, 824.0, 874.0, 924.0]);
}
