use std::path::Path;

use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use raylib::prelude::*;

mod chrome;
mod cli;
mod constants;
mod decoration;
mod floor_plan;
mod input;
mod scenes;
mod sequencer;
mod slider;
mod state;
mod steps;
mod texture_loader;
mod timer;
mod ui;
mod viewer;

use crate::chrome::{ChromeLayout, draw_footer, draw_header, stage_bounds};
use crate::cli::Args;
use crate::constants::*;
use crate::floor_plan::FloorPlans;
use crate::input::Pointer;
use crate::scenes::{ActiveScene, DrawContext, UpdateContext};
use crate::state::{Command, Presentation, PresentationSnapshot};
use crate::steps::STEPS;
use crate::texture_loader::Assets;

/// The scene currently on stage and what it was mounted for.
struct Mounted {
    index: usize,
    epoch: u64,
    scene: ActiveScene,
    age: f32,
}

impl Mounted {
    fn new(presentation: &Presentation) -> Self {
        let snapshot = presentation.snapshot();
        Self {
            index: snapshot.sequencer.active,
            epoch: snapshot.epoch,
            scene: ActiveScene::mount(presentation.active_step().kind, stage_bounds()),
            age: 0.0,
        }
    }

    fn is_stale(&self, snapshot: &PresentationSnapshot) -> bool {
        self.index != snapshot.sequencer.active || self.epoch != snapshot.epoch
    }

    /// Swaps in a fresh scene when the step or the reset epoch moved. The old scene is
    /// dropped here, with whatever timers or drag it held.
    fn refresh(&mut self, presentation: &mut Presentation) -> bool {
        if !self.is_stale(&presentation.snapshot()) {
            return false;
        }
        presentation.unmount_scene();
        *self = Self::new(presentation);
        true
    }

    /// One frame of scene logic. Decoration changes go through the presentation.
    fn update(&mut self, dt: f32, pointer: Pointer, presentation: &mut Presentation, document: &Path) {
        let scene = &mut self.scene;
        presentation.decorate(|decorations| {
            let mut ctx = UpdateContext {
                pointer,
                area: stage_bounds(),
                decorations,
                document,
            };
            scene.update(dt, &mut ctx);
        });
        self.age += dt;
    }

    /// Opacity of the cover drawn over a freshly mounted scene.
    fn fade(&self) -> f32 {
        1.0 - (self.age / MOUNT_FADE_DURATION).clamp(0.0, 1.0)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Console logging, RUST_LOG wins over -v
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .format_timestamp_millis()
        .init();
    info!("RESTITUTION presentation starting");
    debug!("Command-line args: {:?}", args);

    let mut builder = raylib::init();
    builder
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("RESTITUTION")
        .vsync()
        .resizable();
    if args.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let assets = Assets::load(&mut rl, &thread, &args.assets);
    let document = assets.document();
    let plans = FloorPlans::new();
    let chrome = ChromeLayout::new(STEPS.len());

    let mut presentation = Presentation::new(&STEPS, args.period);
    presentation.apply(Command::GoTo(args.step));
    if args.autoplay {
        presentation.apply(Command::TogglePlay);
    }
    let mut mounted = Mounted::new(&presentation);
    let mut last_revision = presentation.sequencer().revision();

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {}", e))?;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let pointer = Pointer::poll(&rl);

        // --- Chrome, then the auto-play clock ---
        let before = presentation.snapshot();
        if let Some(command) = chrome.hit(&pointer, &before.sequencer) {
            debug!("Chrome command {:?}", command);
            presentation.apply(command);
        }
        presentation.advance(dt);

        let snapshot = presentation.snapshot();
        if snapshot.sequencer.revision != last_revision {
            last_revision = snapshot.sequencer.revision;
            info!(
                "Step {}/{} ({}){}",
                snapshot.sequencer.active + 1,
                snapshot.sequencer.len,
                presentation.active_step().label,
                if snapshot.sequencer.playing { ", playing" } else { "" }
            );
        }
        mounted.refresh(&mut presentation);

        // --- Scene update ---
        let scene_pointer = if chrome.owns(&pointer) { pointer.without_press() } else { pointer };
        mounted.update(dt, scene_pointer, &mut presentation, &document);

        // --- Render into the fixed size framebuffer ---
        let snapshot = presentation.snapshot();
        let play_progress = presentation.sequencer().play_progress();
        let draw_ctx = DrawContext {
            pointer: scene_pointer,
            area: stage_bounds(),
            decorations: &snapshot.decorations,
            assets: &assets,
            plans: &plans,
        };
        let fade = mounted.fade();
        let scene = &mounted.scene;
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut d| {
            d.clear_background(ui::BACKGROUND);
            scene.draw(&mut d, &draw_ctx);
            if fade > 0.0 {
                d.draw_rectangle_rec(ui::rect(draw_ctx.area), ui::with_alpha(ui::BACKGROUND, fade));
            }
            draw_header(&mut d, &chrome, presentation.steps(), &snapshot.sequencer, play_progress, &pointer);
            draw_footer(&mut d, &chrome, &snapshot.sequencer, &pointer);
        });

        // Stretch the flipped framebuffer over the window
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    presentation.shutdown();
    info!("Presentation closed");
    Ok(())
}
