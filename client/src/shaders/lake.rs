//! Shimmering lake material.
//!
//! Extends Bevy's `StandardMaterial` with a custom vertex and fragment shader.
//! The vertex stage displaces the grid by the wave field, the fragment stage
//! blends the base and highlight colours by the wave intensity.

use bevy::{
    asset::embedded_asset,
    pbr::{ExtendedMaterial, MaterialExtension},
    prelude::*,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use shimmer_shared::{lake::LakeSettings, AnimationContext};

use super::LakeUniforms;
use crate::sets::FrameSet;
use crate::world::color_from_hex;

const LAKE_SHADER_PATH: &str = "embedded://shimmer_client/shaders/lake.wgsl";

/// Registers the lake material and keeps its time uniform current.
pub struct LakePlugin;

impl Plugin for LakePlugin {
    fn build(&self, app: &mut App) {
        embedded_asset!(app, "lake.wgsl");

        app.add_plugins(MaterialPlugin::<LakeMaterial>::default())
            .add_systems(Update, sync_lake_time.in_set(FrameSet::Sync));
    }
}

/// Lake material extension for the standard PBR pipeline.
#[derive(Asset, AsBindGroup, TypePath, Debug, Clone)]
pub struct LakeMaterialExtension {
    #[uniform(100)]
    pub uniforms: LakeUniforms,
}

impl MaterialExtension for LakeMaterialExtension {
    fn vertex_shader() -> ShaderRef {
        LAKE_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        LAKE_SHADER_PATH.into()
    }
}

/// Type alias for the complete lake material.
pub type LakeMaterial = ExtendedMaterial<StandardMaterial, LakeMaterialExtension>;

/// Build the lake material from the scene settings.
pub fn create_lake_material(settings: &LakeSettings) -> LakeMaterial {
    let uniforms = LakeUniforms::new(
        color_from_hex(settings.base_color),
        color_from_hex(settings.highlight_color),
        &settings.wave,
    );

    ExtendedMaterial {
        base: StandardMaterial {
            base_color: color_from_hex(settings.base_color),
            unlit: true,
            cull_mode: None, // Visible from below as well
            double_sided: true,
            ..default()
        },
        extension: LakeMaterialExtension { uniforms },
    }
}

/// Handle of the single lake material.
#[derive(Resource)]
pub struct LakeMaterialResource {
    pub handle: Handle<LakeMaterial>,
}

/// Uploads the driver's lake time to the shader.
fn sync_lake_time(
    context: Res<AnimationContext>,
    lake: Option<Res<LakeMaterialResource>>,
    mut materials: ResMut<Assets<LakeMaterial>>,
) {
    let Some(lake) = lake else {
        return;
    };

    if let Some(material) = materials.get_mut(&lake.handle) {
        material.extension.uniforms.time = context.lake_time;
    }
}
