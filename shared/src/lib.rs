//! Engine-agnostic animation core for the Shimmerlake scene.
//!
//! Everything in this crate is plain data and pure math so it can be driven
//! by the Bevy client or exercised directly from tests.

pub mod clock;
pub mod config;
pub mod constants;
pub mod crystals;
pub mod driver;
pub mod lake;
pub mod light;
pub mod model;
pub mod particles;
pub mod utils;
pub mod wave;

pub use config::{load_scene_config, SceneConfig};
pub use constants::*;
pub use driver::{AnimationContext, DriverPhase, FrameDriver, FrameSample, OrbitStepMode};
pub use utils::{hex_to_srgb_u8, scene_rng};
