//! Scalar wave field used to animate the lake surface.
//!
//! This module is the CPU-side copy of the field evaluated by the lake shader
//! (`client/src/shaders/lake.wgsl`). The shader receives the same
//! [`WaveParams`] through its material uniform every frame, so both sides
//! always agree on the surface height at a given position and time.
//!
//! ## Usage
//!
//! ```rust
//! use shimmer_shared::wave::{sample_wave, WaveParams};
//!
//! let params = WaveParams::default();
//! let height = sample_wave(10.0, 5.0, 0.5, &params);
//! assert!(height.abs() <= params.max_amplitude());
//! ```

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Parameters of the two-term lake wave.
///
/// `wave(x, z, t) = sin(x * f + t * r1) * a + cos(z * f + t * r2) * a`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Spatial frequency applied to both x and z
    pub frequency: f32,
    /// Amplitude of each term
    pub amplitude: f32,
    /// Time rate of the x-driven sine term
    pub primary_rate: f32,
    /// Time rate of the z-driven cosine term
    pub secondary_rate: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            frequency: 0.2,
            amplitude: 0.3,
            primary_rate: 1.0,
            secondary_rate: 1.5,
        }
    }
}

impl WaveParams {
    /// Largest absolute value the field can reach.
    pub fn max_amplitude(&self) -> f32 {
        2.0 * self.amplitude.abs()
    }

    /// Period in t of the primary term (2π for the default rate).
    pub fn primary_period(&self) -> f32 {
        2.0 * PI / self.primary_rate
    }

    /// Period in t of the secondary term (4π/3 for the default rate).
    pub fn secondary_period(&self) -> f32 {
        2.0 * PI / self.secondary_rate
    }
}

/// The x-driven sine term of the wave.
#[inline]
pub fn primary_term(x: f32, time: f32, params: &WaveParams) -> f32 {
    (x * params.frequency + time * params.primary_rate).sin() * params.amplitude
}

/// The z-driven cosine term of the wave.
#[inline]
pub fn secondary_term(z: f32, time: f32, params: &WaveParams) -> f32 {
    (z * params.frequency + time * params.secondary_rate).cos() * params.amplitude
}

/// Sample the wave height at a horizontal position.
///
/// # Arguments
/// * `x` - World X coordinate
/// * `z` - World Z coordinate
/// * `time` - Elapsed animation time (seconds)
/// * `params` - Wave parameters
///
/// # Returns
/// Vertical displacement, bounded by `params.max_amplitude()`
#[inline]
pub fn sample_wave(x: f32, z: f32, time: f32, params: &WaveParams) -> f32 {
    primary_term(x, time, params) + secondary_term(z, time, params)
}

/// Map a wave value to a colour-mix factor.
///
/// The default field maps into [0.2, 0.8]; the factor is not clamped.
#[inline]
pub fn wave_intensity(wave: f32) -> f32 {
    wave * 0.5 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_wave_at_origin() {
        let params = WaveParams::default();
        // sin(0) * 0.3 + cos(0) * 0.3
        let height = sample_wave(0.0, 0.0, 0.0, &params);
        assert!((height - 0.3).abs() < EPSILON, "Height at origin should be 0.3");
    }

    #[test]
    fn test_wave_stays_in_range() {
        let params = WaveParams::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10_000 {
            let x = rng.gen_range(-500.0..500.0);
            let z = rng.gen_range(-500.0..500.0);
            let t = rng.gen_range(0.0..10_000.0);
            let height = sample_wave(x, z, t, &params);
            assert!(
                (-0.6..=0.6).contains(&height),
                "wave({x}, {z}, {t}) = {height} out of range"
            );
        }
    }

    #[test]
    fn test_primary_term_period() {
        let params = WaveParams::default();
        let period = params.primary_period();
        assert!((period - 2.0 * PI).abs() < EPSILON);

        for t in [0.0, 0.7, 3.1, 12.5] {
            let a = primary_term(4.0, t, &params);
            let b = primary_term(4.0, t + period, &params);
            assert!((a - b).abs() < EPSILON, "primary term not periodic at t={t}");
        }
    }

    #[test]
    fn test_secondary_term_period() {
        let params = WaveParams::default();
        let period = params.secondary_period();
        assert!((period - 4.0 * PI / 3.0).abs() < EPSILON);

        for t in [0.0, 0.7, 3.1, 12.5] {
            let a = secondary_term(-6.0, t, &params);
            let b = secondary_term(-6.0, t + period, &params);
            assert!((a - b).abs() < EPSILON, "secondary term not periodic at t={t}");
        }
    }

    #[test]
    fn test_secondary_term_not_periodic_over_primary_period() {
        let params = WaveParams::default();
        let a = secondary_term(0.0, 0.0, &params);
        let b = secondary_term(0.0, params.primary_period(), &params);
        assert!((a - b).abs() > 0.1);
    }

    #[test]
    fn test_wave_varies_with_time() {
        let params = WaveParams::default();
        let h1 = sample_wave(3.0, 3.0, 0.0, &params);
        let h2 = sample_wave(3.0, 3.0, 1.0, &params);
        assert!((h1 - h2).abs() > 0.001, "Height should vary with time");
    }

    #[test]
    fn test_intensity_range() {
        assert!((wave_intensity(0.6) - 0.8).abs() < EPSILON);
        assert!((wave_intensity(-0.6) - 0.2).abs() < EPSILON);
        assert!((wave_intensity(0.0) - 0.5).abs() < EPSILON);
    }
}
