mod animation;
mod camera;
mod input;
mod sets;
mod shaders;
mod ui;
mod world;

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*, window::PresentMode};
use bevy_inspector_egui::{bevy_egui::EguiPlugin, quick::WorldInspectorPlugin};
use clap::Parser;
use shimmer_shared::{config::default_config_path, load_scene_config, FrameDriver, SceneConfig};
use std::{path::PathBuf, time::Duration};

use crate::animation::AnimationPlugin;

/// Tick interval of the headless runner.
const HEADLESS_FRAME_TIME: Duration = Duration::from_micros(16_667);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, help = "Path to the scene configuration file")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Asset path of the central model, overrides the config")]
    model: Option<String>,

    #[arg(long, help = "Run the animation without a window or renderer")]
    headless: bool,

    #[arg(short, long, help = "Stop after this many frames")]
    frames: Option<u64>,

    #[arg(short, long, help = "Seed for particle and crystal placement")]
    seed: Option<u64>,

    #[arg(short, long, help = "Number of orbiting particles")]
    particles: Option<usize>,

    #[arg(long, help = "Show the world inspector")]
    inspector: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut SceneConfig) {
        if let Some(model) = &self.model {
            config.model.path = model.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(count) = self.particles {
            config.particles.count = count;
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut app = App::new();

    if args.headless {
        app.add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(HEADLESS_FRAME_TIME)),
            LogPlugin::default(),
        ));
    } else {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Shimmerlake".to_string(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }));

        if args.inspector {
            app.add_plugins(EguiPlugin {
                enable_multipass_for_primary_context: true,
            })
            .add_plugins(WorldInspectorPlugin::new());
        }

        app.add_plugins((
            input::InputPlugin,
            camera::CameraPlugin,
            world::ScenePlugin,
            ui::HudPlugin,
        ));
    }

    // Loaded after the log plugin is installed so config problems are reported
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = load_scene_config(&config_path);
    args.apply_overrides(&mut config);

    let driver = FrameDriver::new().with_frame_limit(args.frames);

    info!(
        "Starting Shimmerlake ({}) with {} particles",
        if args.headless { "headless" } else { "windowed" },
        config.particles.count
    );

    app.insert_resource(config)
        .insert_resource(driver)
        .add_plugins(AnimationPlugin { headless: args.headless })
        .run();
}
