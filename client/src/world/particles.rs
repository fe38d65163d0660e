//! Rendering of the orbiting particles.
//!
//! The particle set in `AnimationContext` is the only writer of particle
//! positions. The whole cloud is one mesh holding a small octahedron per
//! particle; after the driver has run, each octahedron is moved to its
//! particle's position by rewriting the vertex buffer in place.

use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::{
        mesh::{Indices, PrimitiveTopology, VertexAttributeValues},
        view::NoFrustumCulling,
    },
};
use shimmer_shared::{AnimationContext, SceneConfig};

use super::{color_from_hex, toggle_visibility};
use crate::input::{data::SceneAction, keyboard::is_action_just_pressed, KeyMap};

#[derive(Component)]
pub struct ParticleCloud;

/// Handle of the cloud mesh rewritten every frame, with the vertex offsets
/// of one particle's octahedron.
#[derive(Resource)]
pub struct ParticleMeshHandle {
    pub handle: Handle<Mesh>,
    pub offsets: [Vec3; 6],
}

const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [2, 0, 5],
    [1, 2, 5],
    [3, 1, 5],
    [0, 3, 5],
];

/// Vertex offsets of an octahedron of diameter `size` around its centre.
fn octahedron_offsets(size: f32) -> [Vec3; 6] {
    let r = size * 0.5;
    [
        Vec3::X * r,
        Vec3::NEG_X * r,
        Vec3::Z * r,
        Vec3::NEG_Z * r,
        Vec3::Y * r,
        Vec3::NEG_Y * r,
    ]
}

/// Triangle indices for `count` octahedra laid out one after the other.
fn octahedron_indices(count: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(count * OCTAHEDRON_FACES.len() * 3);
    for particle in 0..count as u32 {
        let base = particle * 6;
        for face in OCTAHEDRON_FACES {
            indices.extend(face.iter().map(|v| base + v));
        }
    }
    indices
}

pub fn spawn_particles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
    context: Res<AnimationContext>,
) {
    let settings = &config.particles;
    let offsets = octahedron_offsets(settings.size);
    let particles = context.particles.positions();

    let mut positions = vec![[0.0; 3]; particles.len() * offsets.len()];
    copy_positions(particles, &offsets, &mut positions);

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(octahedron_indices(particles.len())));
    let handle = meshes.add(mesh);

    let material = materials.add(StandardMaterial {
        base_color: color_from_hex(settings.color).with_alpha(0.9),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });

    commands.insert_resource(ParticleMeshHandle {
        handle: handle.clone(),
        offsets,
    });
    commands.spawn((
        ParticleCloud,
        Mesh3d(handle),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        // Bounds are computed once; orbiting points would drift out of them
        NoFrustumCulling,
    ));
}

pub fn sync_particle_mesh(
    context: Res<AnimationContext>,
    mesh_handle: Option<Res<ParticleMeshHandle>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !context.is_changed() {
        return;
    }
    let Some(mesh_handle) = mesh_handle else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&mesh_handle.handle) else {
        return;
    };

    if let Some(VertexAttributeValues::Float32x3(buffer)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        copy_positions(context.particles.positions(), &mesh_handle.offsets, buffer);
    }
}

/// Write one octahedron per particle into the vertex buffer.
fn copy_positions(positions: &[Vec3], offsets: &[Vec3; 6], buffer: &mut [[f32; 3]]) {
    debug_assert_eq!(positions.len() * offsets.len(), buffer.len());

    for (vertices, position) in buffer.chunks_exact_mut(offsets.len()).zip(positions) {
        for (vertex, offset) in vertices.iter_mut().zip(offsets) {
            *vertex = (*position + *offset).to_array();
        }
    }
}

pub fn toggle_particles(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    mut clouds: Query<&mut Visibility, With<ParticleCloud>>,
) {
    if !is_action_just_pressed(SceneAction::ToggleParticles, &keyboard_input, &key_map) {
        return;
    }

    for mut visibility in clouds.iter_mut() {
        toggle_visibility(&mut visibility);
    }
}
