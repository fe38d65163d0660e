//! Random placement of the decorative crystals.
//!
//! Crystals are placed once when the scene is built and never move.

use bevy::math::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrystalSettings {
    pub count: usize,
    /// Side of the square (centred on the origin) crystals are scattered over
    pub spread: f32,
    pub max_height: f32,
    /// Cone base radius
    pub radius: f32,
    /// Cone height
    pub height: f32,
    /// Radial segments of each cone
    pub segments: u32,
    pub color: u32,
    pub emissive_intensity: f32,
    pub opacity: f32,
}

impl Default for CrystalSettings {
    fn default() -> Self {
        Self {
            count: CRYSTAL_COUNT,
            spread: CRYSTAL_SPREAD,
            max_height: CRYSTAL_MAX_HEIGHT,
            radius: 1.0,
            height: 3.0,
            segments: 8,
            color: CRYSTAL_COLOR,
            emissive_intensity: 0.6,
            opacity: 0.9,
        }
    }
}

/// Positions of every crystal in the scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrystalLayout {
    pub positions: Vec<Vec3>,
}

impl CrystalLayout {
    pub fn generate<R: Rng>(settings: &CrystalSettings, rng: &mut R) -> Self {
        let positions = (0..settings.count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * settings.spread,
                    rng.gen::<f32>() * settings.max_height,
                    (rng.gen::<f32>() - 0.5) * settings.spread,
                )
            })
            .collect();

        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_layout_within_bounds() {
        let settings = CrystalSettings::default();
        let mut rng = StdRng::seed_from_u64(11);
        let layout = CrystalLayout::generate(&settings, &mut rng);

        assert_eq!(layout.len(), 30);
        for p in &layout.positions {
            assert!((-25.0..25.0).contains(&p.x));
            assert!((0.0..5.0).contains(&p.y));
            assert!((-25.0..25.0).contains(&p.z));
        }
    }

    #[test]
    fn test_layout_reproducible_from_seed() {
        let settings = CrystalSettings::default();
        let a = CrystalLayout::generate(&settings, &mut StdRng::seed_from_u64(5));
        let b = CrystalLayout::generate(&settings, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
