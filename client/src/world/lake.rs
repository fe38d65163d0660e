use bevy::prelude::*;
use shimmer_shared::{lake::LakeGrid, SceneConfig};

use crate::shaders::{create_lake_material, LakeMaterial, LakeMaterialResource};

#[derive(Component)]
pub struct Lake;

/// Spawns the lake grid. The mesh stays flat; displacement happens in the
/// vertex shader.
pub fn spawn_lake(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<LakeMaterial>>,
    config: Res<SceneConfig>,
) {
    let grid = LakeGrid::from_settings(&config.lake);

    // Bevy counts interior cuts, not segments
    let mesh = Plane3d::default()
        .mesh()
        .size(grid.size, grid.size)
        .subdivisions(grid.segments - 1);

    let handle = materials.add(create_lake_material(&config.lake));
    commands.insert_resource(LakeMaterialResource {
        handle: handle.clone(),
    });

    commands.spawn((
        Lake,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(handle),
        Transform::IDENTITY,
    ));

    info!(
        "Lake spawned: {}x{} with {} vertices",
        grid.size,
        grid.size,
        grid.vertex_count()
    );
}
