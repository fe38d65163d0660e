//! Lake shader uniform data
//!
//! Separated into its own module to isolate the `#![allow(dead_code)]` directive,
//! which is required due to the ShaderType derive macro generating internal
//! `check` functions that trigger warnings.

#![allow(dead_code)]

use bevy::{prelude::*, render::render_resource::ShaderType};
use shimmer_shared::wave::WaveParams;

/// Uniform data for the lake shader (matches the WGSL `LakeUniforms` struct)
#[derive(ShaderType, Debug, Clone, Copy)]
pub struct LakeUniforms {
    /// Linear RGBA colour at the wave troughs
    pub base_color: Vec4,
    /// Linear RGBA colour at the wave crests
    pub highlight_color: Vec4,
    /// Elapsed animation time, rewritten every frame
    pub time: f32,
    pub frequency: f32,
    pub amplitude: f32,
    pub primary_rate: f32,
    pub secondary_rate: f32,
}

impl LakeUniforms {
    pub fn new(base_color: Color, highlight_color: Color, wave: &WaveParams) -> Self {
        Self {
            base_color: base_color.to_linear().to_vec4(),
            highlight_color: highlight_color.to_linear().to_vec4(),
            time: 0.0,
            frequency: wave.frequency,
            amplitude: wave.amplitude,
            primary_rate: wave.primary_rate,
            secondary_rate: wave.secondary_rate,
        }
    }
}
