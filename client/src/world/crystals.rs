use bevy::prelude::*;
use shimmer_shared::{crystals::CrystalLayout, SceneConfig};

use super::{color_from_hex, toggle_visibility};
use crate::animation::SceneRng;
use crate::input::{data::SceneAction, keyboard::is_action_just_pressed, KeyMap};

#[derive(Component)]
pub struct Crystal;

/// Scatters the static crystals. They share one mesh and one material.
pub fn spawn_crystals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SceneRng>,
    config: Res<SceneConfig>,
) {
    let settings = &config.crystals;
    let layout = CrystalLayout::generate(settings, &mut rng.0);

    let mesh = meshes.add(
        Cone {
            radius: settings.radius,
            height: settings.height,
        }
        .mesh()
        .resolution(settings.segments),
    );

    let color = color_from_hex(settings.color);
    let material = materials.add(StandardMaterial {
        base_color: color.with_alpha(settings.opacity),
        emissive: color.to_linear() * settings.emissive_intensity,
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.1,
        reflectance: 0.8,
        ..default()
    });

    for position in &layout.positions {
        commands.spawn((
            Crystal,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(*position),
        ));
    }

    debug!("Placed {} crystals", layout.len());
}

pub fn toggle_crystals(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    mut crystals: Query<&mut Visibility, With<Crystal>>,
) {
    if !is_action_just_pressed(SceneAction::ToggleCrystals, &keyboard_input, &key_map) {
        return;
    }

    for mut visibility in crystals.iter_mut() {
        toggle_visibility(&mut visibility);
    }
}
