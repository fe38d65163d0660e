//! Bevy glue for the animated core.
//!
//! The driver and its context live in `shimmer_shared`; this plugin owns them
//! as resources, feeds Bevy's frame time into the driver once per frame and
//! turns a stopped driver into a clean `AppExit`.

use bevy::prelude::*;
use rand::rngs::StdRng;
use shimmer_shared::{
    lake::{LakeGrid, LakeSettings},
    particles::ParticleSet,
    scene_rng,
    wave::wave_intensity,
    AnimationContext, FrameDriver, OrbitStepMode, SceneConfig,
};

use crate::sets::{FrameSet, SetupSet};

/// Frames between two progress reports in headless mode.
const HEADLESS_REPORT_INTERVAL: u64 = 120;

pub struct AnimationPlugin {
    pub headless: bool,
}

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameDriver>()
            .configure_sets(Startup, (SetupSet::Animation, SetupSet::Scene).chain())
            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Animate, FrameSet::Sync, FrameSet::Ui).chain(),
            )
            .add_systems(
                Startup,
                (init_animation_context, start_driver)
                    .chain()
                    .in_set(SetupSet::Animation),
            )
            .add_systems(Update, drive_frame.in_set(FrameSet::Animate))
            .add_systems(Last, exit_when_stopped);

        if self.headless {
            app.add_systems(Update, report_progress.after(FrameSet::Animate));
        }
    }
}

/// RNG shared by everything placed randomly at startup.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

fn init_animation_context(mut commands: Commands, config: Res<SceneConfig>) {
    let mut rng = scene_rng(config.seed);

    let particles = ParticleSet::generate(&config.particles, &mut rng);
    let step_mode = if config.particles.frame_rate_independent {
        OrbitStepMode::Scaled {
            reference_rate: config.particles.reference_frame_rate,
        }
    } else {
        OrbitStepMode::PerFrame
    };

    info!(
        "Generated {} particles ({:?} steps)",
        particles.len(),
        step_mode
    );

    commands.insert_resource(
        AnimationContext::new(particles, config.light.orbit).with_step_mode(step_mode),
    );
    commands.insert_resource(SceneRng(rng));
}

fn start_driver(mut driver: ResMut<FrameDriver>) {
    driver.start();
}

/// The per-frame callback: advances the clock and runs every updater.
fn drive_frame(
    time: Res<Time>,
    mut driver: ResMut<FrameDriver>,
    mut context: ResMut<AnimationContext>,
) {
    driver.run_frame(&mut context, time.delta_secs());
}

fn exit_when_stopped(driver: Res<FrameDriver>, mut exit: EventWriter<AppExit>) {
    if driver.is_stopped() {
        exit.write(AppExit::Success);
    }
}

fn report_progress(
    driver: Res<FrameDriver>,
    context: Res<AnimationContext>,
    config: Res<SceneConfig>,
) {
    if driver.frames() == 0 || driver.frames() % HEADLESS_REPORT_INTERVAL != 0 {
        return;
    }

    info!("{}", progress_line(driver.frames(), &context, &config.lake));
}

/// One line summary of the animated state: clock, light, particle shell and
/// the lake's current height and colour-mix range.
fn progress_line(frames: u64, context: &AnimationContext, lake: &LakeSettings) -> String {
    let (min_radius, max_radius) = context.particles.radius_range().unwrap_or_default();
    let (low, high) = LakeGrid::from_settings(lake).height_range(context.lake_time, &lake.wave);

    format!(
        "frame {} t={:.2}s light={:.2} particle radius {:.3}..{:.3} lake height {:.3}..{:.3} mix {:.2}..{:.2}",
        frames,
        context.clock.elapsed(),
        context.light_position,
        min_radius,
        max_radius,
        low,
        high,
        wave_intensity(low),
        wave_intensity(high)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shimmer_shared::{light::LightOrbit, wave::WaveParams};

    #[test]
    fn test_progress_line_reports_lake_range() {
        let particles = ParticleSet::from_parts(vec![Vec3::new(10.0, 0.0, 0.0)], vec![0.002])
            .unwrap();
        let mut context = AnimationContext::new(particles, LightOrbit::default());
        let mut driver = FrameDriver::new();
        driver.start();
        driver.run_frame(&mut context, 0.5);

        let lake = LakeSettings {
            size: 10.0,
            segments: 10,
            ..Default::default()
        };
        let (low, high) = LakeGrid::from_settings(&lake).height_range(0.5, &WaveParams::default());

        let line = progress_line(1, &context, &lake);
        assert!(line.starts_with("frame 1 t=0.50s"), "{line}");
        assert!(line.contains(&format!("lake height {low:.3}..{high:.3}")), "{line}");
        assert!(line.contains("particle radius 10.000..10.000"), "{line}");
    }
}
