//! Scene construction and the per-frame mirroring of the animation context
//! into Bevy entities.

pub mod crystals;
pub mod lake;
pub mod light;
pub mod model;
pub mod particles;

use bevy::prelude::*;
use shimmer_shared::hex_to_srgb_u8;

use crate::shaders::LakePlugin;
use crate::sets::{FrameSet, SetupSet};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(LakePlugin)
            .add_systems(
                Startup,
                (
                    lake::spawn_lake,
                    particles::spawn_particles,
                    crystals::spawn_crystals,
                    light::spawn_lights,
                    model::request_model,
                )
                    .in_set(SetupSet::Scene),
            )
            .add_systems(
                Update,
                (
                    particles::sync_particle_mesh,
                    light::sync_light_position,
                    model::poll_model_load,
                )
                    .in_set(FrameSet::Sync),
            )
            .add_systems(
                Update,
                (particles::toggle_particles, crystals::toggle_crystals).in_set(FrameSet::Input),
            );
    }
}

/// Convert a `0xRRGGBB` sRGB colour.
pub fn color_from_hex(hex: u32) -> Color {
    let [r, g, b] = hex_to_srgb_u8(hex);
    Color::srgb_u8(r, g, b)
}

/// Flip between shown and hidden. `Inherited` counts as shown.
pub fn toggle_visibility(visibility: &mut Visibility) {
    *visibility = match *visibility {
        Visibility::Hidden => Visibility::Inherited,
        _ => Visibility::Hidden,
    };
}
