use bevy::prelude::*;
use shimmer_shared::{AnimationContext, SceneConfig};

use super::color_from_hex;

#[derive(Component)]
pub struct MovingLight;

pub fn spawn_lights(mut commands: Commands, config: Res<SceneConfig>, context: Res<AnimationContext>) {
    let settings = &config.light;

    commands.insert_resource(AmbientLight {
        color: color_from_hex(settings.ambient_color),
        brightness: settings.ambient_brightness,
        ..default()
    });

    commands.spawn((
        MovingLight,
        PointLight {
            color: color_from_hex(settings.color),
            intensity: settings.intensity,
            range: settings.range,
            ..default()
        },
        Transform::from_translation(context.light_position),
    ));
}

/// Moves the light entity to the position computed by the driver.
pub fn sync_light_position(
    context: Res<AnimationContext>,
    mut lights: Query<&mut Transform, With<MovingLight>>,
) {
    for mut transform in lights.iter_mut() {
        transform.translation = context.light_position;
    }
}
