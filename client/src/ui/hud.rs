//! Debug overlay in the top-left corner, toggled with F3.

use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    prelude::*,
};
use shimmer_shared::{
    model::{ModelStatus, ModelTracker},
    AnimationContext, FrameDriver,
};

use crate::input::{data::SceneAction, keyboard::is_action_just_pressed, KeyMap};
use crate::world::toggle_visibility;

/// Marker to find the container entity so we can show/hide the HUD
#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct FrameText;

#[derive(Component)]
pub struct ParticlesText;

#[derive(Component)]
pub struct LightText;

#[derive(Component)]
pub struct ModelText;

pub fn setup_hud(mut commands: Commands) {
    let root = commands
        .spawn((
            HudRoot,
            BackgroundColor(Color::BLACK.with_alpha(0.5)),
            GlobalZIndex(i32::MAX),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(1.),
                top: Val::Percent(1.),
                bottom: Val::Auto,
                right: Val::Auto,
                padding: UiRect::all(Val::Px(4.0)),
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
        ))
        .id();

    fn spawn_debug_text<T: Component>(
        commands: &mut Commands,
        marker: T,
        initial_text: &str,
    ) -> Entity {
        commands
            .spawn((
                marker,
                Text::new(initial_text),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ))
            .id()
    }

    let fps_text = spawn_debug_text(&mut commands, FpsText, "FPS: N/A");
    let frame_text = spawn_debug_text(&mut commands, FrameText, "...");
    let particles_text = spawn_debug_text(&mut commands, ParticlesText, "...");
    let light_text = spawn_debug_text(&mut commands, LightText, "...");
    let model_text = spawn_debug_text(&mut commands, ModelText, "Model: ...");
    commands.entity(root).add_children(&[
        fps_text,
        frame_text,
        particles_text,
        light_text,
        model_text,
    ]);
}

pub fn hud_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    driver: Res<FrameDriver>,
    context: Option<Res<AnimationContext>>,
    tracker: Option<Res<ModelTracker>>,
    fps_query: Query<Entity, With<FpsText>>,
    frame_query: Query<Entity, With<FrameText>>,
    particles_query: Query<Entity, With<ParticlesText>>,
    light_query: Query<Entity, With<LightText>>,
    model_query: Query<Entity, With<ModelText>>,
    mut writer: TextUiWriter,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    for entity in fps_query.iter() {
        *writer.text(entity, 0) = match fps {
            Some(value) => format!("FPS: {value:.0}"),
            None => "FPS: N/A".to_string(),
        };
    }

    let Some(context) = context else {
        return;
    };

    for entity in frame_query.iter() {
        *writer.text(entity, 0) = format!(
            "Frame {} ({:?}), t = {:.2}s",
            driver.frames(),
            driver.phase(),
            context.clock.elapsed()
        );
    }
    for entity in particles_query.iter() {
        *writer.text(entity, 0) = format!("Particles: {}", context.particles.len());
    }
    for entity in light_query.iter() {
        let p = context.light_position;
        *writer.text(entity, 0) = format!("Light: ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z);
    }

    if let Some(tracker) = tracker {
        for entity in model_query.iter() {
            *writer.text(entity, 0) = format!("Model: {}", model_status_label(tracker.status()));
        }
    }
}

fn model_status_label(status: &ModelStatus) -> &'static str {
    match status {
        ModelStatus::Pending => "loading",
        ModelStatus::Attached => "loaded",
        ModelStatus::Failed(_) => "failed",
    }
}

/// Toggle the HUD when pressing F3
pub fn toggle_hud_system(
    mut q: Query<&mut Visibility, With<HudRoot>>,
    kbd: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
) {
    if !is_action_just_pressed(SceneAction::ToggleHud, &kbd, &key_map) {
        return;
    }

    for mut vis in q.iter_mut() {
        toggle_visibility(&mut vis);
    }
}
