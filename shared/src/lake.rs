//! CPU description of the lake surface grid.
//!
//! The GPU displaces the lake in its vertex shader; this grid mirrors the
//! mesh layout so the same displacement can be evaluated on the CPU (headless
//! reporting and tests).

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::wave::{sample_wave, WaveParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LakeSettings {
    /// Side length of the square lake
    pub size: f32,
    /// Segments along each side
    pub segments: u32,
    pub base_color: u32,
    pub highlight_color: u32,
    pub wave: WaveParams,
}

impl Default for LakeSettings {
    fn default() -> Self {
        Self {
            size: LAKE_SIZE,
            segments: LAKE_SEGMENTS,
            base_color: LAKE_BASE_COLOR,
            highlight_color: LAKE_HIGHLIGHT_COLOR,
            wave: WaveParams::default(),
        }
    }
}

/// Flat grid lying in the XZ plane, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LakeGrid {
    pub size: f32,
    pub segments: u32,
}

impl LakeGrid {
    pub fn new(size: f32, segments: u32) -> Self {
        Self {
            size,
            segments: segments.max(1),
        }
    }

    pub fn from_settings(settings: &LakeSettings) -> Self {
        Self::new(settings.size, settings.segments)
    }

    /// Vertices along one side of the grid.
    pub fn vertices_per_side(&self) -> u32 {
        self.segments + 1
    }

    pub fn vertex_count(&self) -> usize {
        let side = self.vertices_per_side() as usize;
        side * side
    }

    /// Undisplaced vertex positions, row by row along +Z.
    pub fn base_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let side = self.vertices_per_side();
        let step = self.size / self.segments as f32;
        let half = self.size / 2.0;

        (0..side).flat_map(move |row| {
            (0..side).map(move |col| {
                Vec3::new(-half + col as f32 * step, 0.0, -half + row as f32 * step)
            })
        })
    }

    /// Lowest and highest displaced height at `time`.
    ///
    /// Heights are sampled from the flat grid on every call; nothing is carried
    /// over from earlier frames.
    pub fn height_range(&self, time: f32, params: &WaveParams) -> (f32, f32) {
        self.base_positions()
            .map(|p| sample_wave(p.x, p.z, time, params))
            .fold((f32::MAX, f32::MIN), |(lo, hi), h| (lo.min(h), hi.max(h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count() {
        let grid = LakeGrid::new(100.0, 200);
        assert_eq!(grid.vertex_count(), 201 * 201);
        assert_eq!(grid.base_positions().count(), grid.vertex_count());
    }

    #[test]
    fn test_grid_corners() {
        let grid = LakeGrid::new(100.0, 4);
        let positions: Vec<Vec3> = grid.base_positions().collect();
        assert_eq!(positions[0], Vec3::new(-50.0, 0.0, -50.0));
        assert_eq!(positions[positions.len() - 1], Vec3::new(50.0, 0.0, 50.0));
    }

    #[test]
    fn test_displacement_is_not_accumulated() {
        let grid = LakeGrid::new(10.0, 8);
        let params = WaveParams::default();
        let first = grid.height_range(1.0, &params);
        let _ = grid.height_range(2.0, &params);
        let again = grid.height_range(1.0, &params);
        assert_eq!(first, again);
    }

    #[test]
    fn test_height_range_bounded() {
        let grid = LakeGrid::new(100.0, 50);
        let (lo, hi) = grid.height_range(3.0, &WaveParams::default());
        assert!(lo >= -0.6 && hi <= 0.6);
        assert!(lo < hi);
    }

    #[test]
    fn test_zero_segments_clamped() {
        assert_eq!(LakeGrid::new(1.0, 0).vertex_count(), 4);
    }
}
