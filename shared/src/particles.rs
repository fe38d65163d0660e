//! Orbiting particle field.
//!
//! Every particle sits on a horizontal circle around the vertical axis and
//! advances along it at its own constant angular speed. Radius and height are
//! fixed at creation; only the phase changes from frame to frame.

use bevy::math::Vec3;
use bevy_ecs::resource::Resource;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::constants::*;

/// Parameters used when the particle field is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_height: f32,
    pub max_height: f32,
    /// Angular speed bounds, in radians per frame
    pub min_speed: f32,
    pub max_speed: f32,
    /// Scale each step by the frame delta instead of advancing a fixed
    /// increment per frame.
    pub frame_rate_independent: bool,
    /// Frame rate at which a scaled step equals one fixed step.
    pub reference_frame_rate: f32,
    pub color: u32,
    /// Drawn diameter in world units
    pub size: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
            min_height: PARTICLE_MIN_HEIGHT,
            max_height: PARTICLE_MAX_HEIGHT,
            min_speed: PARTICLE_MIN_SPEED,
            max_speed: PARTICLE_MAX_SPEED,
            frame_rate_independent: false,
            reference_frame_rate: 60.0,
            color: PARTICLE_COLOR,
            size: PARTICLE_SIZE,
        }
    }
}

/// Fixed-size set of orbiting particles.
///
/// `positions` and `speeds` always have the same length.
#[derive(Resource, Debug, Clone, Default)]
pub struct ParticleSet {
    positions: Vec<Vec3>,
    speeds: Vec<f32>,
}

impl ParticleSet {
    /// Build a set from explicit positions and speeds.
    ///
    /// Returns `None` when the two slices differ in length.
    pub fn from_parts(positions: Vec<Vec3>, speeds: Vec<f32>) -> Option<Self> {
        if positions.len() != speeds.len() {
            return None;
        }
        Some(Self { positions, speeds })
    }

    /// Generate a random particle field.
    pub fn generate<R: Rng>(settings: &ParticleSettings, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(settings.count);
        let mut speeds = Vec::with_capacity(settings.count);

        for _ in 0..settings.count {
            let angle = rng.gen_range(0.0..TAU);
            let radius = sample_range(rng, settings.min_radius, settings.max_radius);
            let height = sample_range(rng, settings.min_height, settings.max_height);
            positions.push(Vec3::new(angle.cos() * radius, height, angle.sin() * radius));
            speeds.push(sample_range(rng, settings.min_speed, settings.max_speed));
        }

        Self { positions, speeds }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    /// Advance every particle by its own fixed per-frame increment.
    pub fn advance(&mut self) {
        for (position, speed) in self.positions.iter_mut().zip(&self.speeds) {
            *position = orbit_step(*position, *speed);
        }
    }

    /// Advance every particle by `speed * delta * reference_rate`.
    ///
    /// At `delta == 1.0 / reference_rate` this matches [`ParticleSet::advance`].
    pub fn advance_scaled(&mut self, delta: f32, reference_rate: f32) {
        let scale = delta * reference_rate;
        for (position, speed) in self.positions.iter_mut().zip(&self.speeds) {
            *position = orbit_step(*position, *speed * scale);
        }
    }

    /// Smallest and largest orbit radius in the set.
    pub fn radius_range(&self) -> Option<(f32, f32)> {
        self.positions.iter().map(|p| orbit_radius(*p)).fold(None, |acc, r| match acc {
            None => Some((r, r)),
            Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
        })
    }
}

fn sample_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Distance of a point from the vertical axis.
#[inline]
pub fn orbit_radius(position: Vec3) -> f32 {
    (position.x * position.x + position.z * position.z).sqrt()
}

/// Angle of a point around the vertical axis, measured from +X towards +Z.
#[inline]
pub fn orbit_angle(position: Vec3) -> f32 {
    position.z.atan2(position.x)
}

/// Rotate a point around the vertical axis by `angle` radians.
///
/// Radius and angle are re-derived from the current position, so the
/// height is left untouched.
#[inline]
pub fn orbit_step(position: Vec3, angle: f32) -> Vec3 {
    let radius = orbit_radius(position);
    let new_angle = orbit_angle(position) + angle;
    Vec3::new(new_angle.cos() * radius, position.y, new_angle.sin() * radius)
}
