//! Custom shader integration.
//!
//! ## Lake shader
//! `lake.wgsl` displaces the lake grid vertically with the same two-term wave
//! as `shimmer_shared::wave` and colours each fragment by blending a base and
//! a highlight colour with the wave's intensity. The shader is embedded in the
//! binary and registered by [`lake::LakePlugin`].

pub mod lake;
mod lake_uniforms;

pub use lake::*;
pub use lake_uniforms::LakeUniforms;
