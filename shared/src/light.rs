//! Point light that circles the scene at a fixed height.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Horizontal circle followed by the moving light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightOrbit {
    pub radius: f32,
    pub height: f32,
    /// Radians per second
    pub angular_speed: f32,
}

impl Default for LightOrbit {
    fn default() -> Self {
        Self {
            radius: LIGHT_ORBIT_RADIUS,
            height: LIGHT_ORBIT_HEIGHT,
            angular_speed: LIGHT_ANGULAR_SPEED,
        }
    }
}

impl LightOrbit {
    /// Light position at elapsed time `time`.
    ///
    /// Pure function of time: calling it twice with the same value yields the
    /// same position.
    pub fn position_at(&self, time: f32) -> Vec3 {
        let phase = time * self.angular_speed;
        Vec3::new(
            self.radius * phase.sin(),
            self.height,
            self.radius * phase.cos(),
        )
    }
}

/// Static appearance of the moving light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    pub orbit: LightOrbit,
    pub color: u32,
    /// Luminous power in lumens
    pub intensity: f32,
    pub range: f32,
    pub ambient_color: u32,
    pub ambient_brightness: f32,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            orbit: LightOrbit::default(),
            color: LIGHT_COLOR,
            intensity: 2_000_000.0,
            range: LIGHT_RANGE,
            ambient_color: AMBIENT_COLOR,
            ambient_brightness: 400.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_light_stays_on_circle() {
        let orbit = LightOrbit::default();
        for i in 0..1000 {
            let t = i as f32 * 0.37;
            let p = orbit.position_at(t);
            let radius_sq = p.x * p.x + p.z * p.z;
            assert!((radius_sq - 100.0).abs() < 1e-2, "off circle at t={t}");
            assert_eq!(p.y, 10.0);
        }
    }

    #[test]
    fn test_light_at_pi() {
        let p = LightOrbit::default().position_at(PI);
        assert!((p.x - 10.0).abs() < 1e-4);
        assert_eq!(p.y, 10.0);
        assert!(p.z.abs() < 1e-4);
    }

    #[test]
    fn test_light_at_start() {
        let p = LightOrbit::default().position_at(0.0);
        assert_eq!(p, Vec3::new(0.0, 10.0, 10.0));
    }

    #[test]
    fn test_position_is_idempotent() {
        let orbit = LightOrbit::default();
        assert_eq!(orbit.position_at(7.25), orbit.position_at(7.25));
    }
}
