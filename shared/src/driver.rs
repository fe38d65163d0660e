//! Per-frame animation driver.
//!
//! The driver owns no scene state itself. Each frame it is handed the
//! [`AnimationContext`] and runs the updaters over it in a fixed order:
//!
//! 1. sample the clock
//! 2. set the lake time uniform
//! 3. advance the particle orbits
//! 4. move the light
//!
//! Rendering happens after the driver returns, so the renderer always reads a
//! fully updated context.

use bevy::math::Vec3;
use bevy_ecs::resource::Resource;
use bevy_log::{debug, info};

use crate::clock::AnimationClock;
use crate::light::LightOrbit;
use crate::particles::ParticleSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriverPhase {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// How particle steps relate to frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitStepMode {
    /// One fixed increment per frame, regardless of frame time
    PerFrame,
    /// Increment scaled by `delta * reference_rate`
    Scaled { reference_rate: f32 },
}

/// Everything the animated core reads and writes during a frame.
#[derive(Resource, Debug, Clone)]
pub struct AnimationContext {
    pub clock: AnimationClock,
    pub particles: ParticleSet,
    pub light_orbit: LightOrbit,
    pub light_position: Vec3,
    /// Time value uploaded to the lake shader
    pub lake_time: f32,
    pub step_mode: OrbitStepMode,
}

impl AnimationContext {
    pub fn new(particles: ParticleSet, light_orbit: LightOrbit) -> Self {
        Self {
            clock: AnimationClock::new(),
            particles,
            light_position: light_orbit.position_at(0.0),
            light_orbit,
            lake_time: 0.0,
            step_mode: OrbitStepMode::PerFrame,
        }
    }

    pub fn with_step_mode(mut self, step_mode: OrbitStepMode) -> Self {
        self.step_mode = step_mode;
        self
    }
}

/// Snapshot of a completed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    pub frame: u64,
    pub delta: f32,
    pub elapsed: f32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct FrameDriver {
    phase: DriverPhase,
    frames: u64,
    frame_limit: Option<u64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop automatically once `limit` frames have run.
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.phase == DriverPhase::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == DriverPhase::Stopped
    }

    /// Idle -> Running. Has no effect in any other phase.
    pub fn start(&mut self) {
        if self.phase == DriverPhase::Idle {
            info!("Animation loop started");
            self.phase = DriverPhase::Running;
        }
    }

    /// Request a clean stop. Stopped is terminal.
    pub fn stop(&mut self) {
        if self.phase != DriverPhase::Stopped {
            info!("Animation loop stopped after {} frames", self.frames);
            self.phase = DriverPhase::Stopped;
        }
    }

    /// Run one frame over `ctx`. Returns `None` unless the driver is running.
    pub fn run_frame(&mut self, ctx: &mut AnimationContext, delta: f32) -> Option<FrameSample> {
        if !self.is_running() {
            return None;
        }

        let (delta, elapsed) = ctx.clock.tick(delta);

        ctx.lake_time = elapsed;

        match ctx.step_mode {
            OrbitStepMode::PerFrame => ctx.particles.advance(),
            OrbitStepMode::Scaled { reference_rate } => {
                ctx.particles.advance_scaled(delta, reference_rate)
            }
        }

        ctx.light_position = ctx.light_orbit.position_at(elapsed);

        self.frames += 1;
        let sample = FrameSample {
            frame: self.frames,
            delta,
            elapsed,
        };

        if let Some(limit) = self.frame_limit {
            if self.frames >= limit {
                debug!("Frame limit {} reached", limit);
                self.stop();
            }
        }

        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn single_particle_context() -> AnimationContext {
        let particles =
            ParticleSet::from_parts(vec![Vec3::new(10.0, 1.0, 0.0)], vec![0.002]).unwrap();
        AnimationContext::new(particles, LightOrbit::default())
    }

    #[test]
    fn test_idle_driver_does_nothing() {
        let mut driver = FrameDriver::new();
        let mut ctx = single_particle_context();
        assert_eq!(driver.phase(), DriverPhase::Idle);
        assert!(driver.run_frame(&mut ctx, 0.016).is_none());
        assert_eq!(ctx.clock.elapsed(), 0.0);
        assert_eq!(ctx.particles.positions()[0], Vec3::new(10.0, 1.0, 0.0));
    }

    #[test]
    fn test_running_frame_updates_everything() {
        let mut driver = FrameDriver::new();
        let mut ctx = single_particle_context();
        driver.start();

        let sample = driver.run_frame(&mut ctx, 0.5).unwrap();
        assert_eq!(sample.frame, 1);
        assert_eq!(sample.elapsed, 0.5);
        assert_eq!(ctx.lake_time, 0.5);
        assert_eq!(ctx.light_position, ctx.light_orbit.position_at(0.5));
        assert!(ctx.particles.positions()[0].z > 0.0);
    }

    #[test]
    fn test_light_reaches_expected_point() {
        let mut driver = FrameDriver::new();
        let mut ctx = single_particle_context();
        driver.start();

        // Advance the clock to t = pi in four equal frames
        for _ in 0..4 {
            driver.run_frame(&mut ctx, PI / 4.0);
        }

        assert!((ctx.clock.elapsed() - PI).abs() < 1e-5);
        assert!((ctx.light_position.x - 10.0).abs() < 1e-3);
        assert_eq!(ctx.light_position.y, 10.0);
        assert!(ctx.light_position.z.abs() < 1e-3);
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut driver = FrameDriver::new();
        let mut ctx = single_particle_context();
        driver.start();
        driver.run_frame(&mut ctx, 0.1);
        driver.stop();
        driver.start();

        assert!(driver.is_stopped());
        assert!(driver.run_frame(&mut ctx, 0.1).is_none());
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_frame_limit_stops_driver() {
        let mut driver = FrameDriver::new().with_frame_limit(Some(3));
        let mut ctx = single_particle_context();
        driver.start();

        let ran = (0..10)
            .filter_map(|_| driver.run_frame(&mut ctx, 0.016))
            .count();
        assert_eq!(ran, 3);
        assert!(driver.is_stopped());
    }

    #[test]
    fn test_particle_step_ignores_delta_by_default() {
        let mut driver = FrameDriver::new();
        let mut slow = single_particle_context();
        let mut fast = single_particle_context();
        driver.start();
        driver.run_frame(&mut slow, 0.1);

        let mut other = FrameDriver::new();
        other.start();
        other.run_frame(&mut fast, 0.001);

        assert_eq!(slow.particles.positions(), fast.particles.positions());
    }

    #[test]
    fn test_scaled_step_mode() {
        let mut driver = FrameDriver::new();
        let mut ctx = single_particle_context()
            .with_step_mode(OrbitStepMode::Scaled { reference_rate: 60.0 });
        driver.start();

        // Half a reference frame moves half a step
        driver.run_frame(&mut ctx, 1.0 / 120.0);
        let angle = crate::particles::orbit_angle(ctx.particles.positions()[0]);
        assert!((angle - 0.001).abs() < 1e-5);
    }
}
