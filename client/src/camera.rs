//! Perspective camera with orbit-style controls.
//!
//! Left drag rotates around the focus point, right drag pans it and the mouse
//! wheel zooms. The animated core never reads input; everything here only
//! moves the camera.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
    window::WindowResized,
};
use shimmer_shared::{config::CameraSettings, SceneConfig};

use crate::input::{data::SceneAction, keyboard::is_action_just_pressed, KeyMap};
use crate::sets::{FrameSet, SetupSet};

const ROTATE_SENSITIVITY: f32 = 0.005;
const PAN_SENSITIVITY: f32 = 0.002;
const ZOOM_SENSITIVITY: f32 = 0.1;
const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 500.0;
/// Keeps the pitch away from the poles where yaw becomes undefined.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera.in_set(SetupSet::Scene))
            .add_systems(
                Update,
                (reset_camera_system, orbit_camera_system)
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(Update, log_resize_system);
    }
}

/// Spherical coordinates of the camera around its focus point.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Orbit that places the camera at `position` looking at `focus`.
    pub fn looking_at(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let distance = offset.length().max(MIN_DISTANCE);
        Self {
            focus,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::looking_at(settings.position, settings.target)
    }

    pub fn position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.focus
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.focus, Vec3::Y)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn pan(&mut self, delta: Vec2, rotation: Quat) {
        let scale = self.distance * PAN_SENSITIVITY;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.focus += (-right * delta.x + up * delta.y) * scale;
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.distance =
            (self.distance * (1.0 - scroll * ZOOM_SENSITIVITY)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

fn setup_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let settings = &config.camera;
    let orbit = OrbitCamera::from_settings(settings);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        orbit.transform(),
        orbit,
    ));
}

fn orbit_camera_system(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let Ok((mut orbit, mut transform)) = cameras.single_mut() else {
        return;
    };

    let before = *orbit;

    if mouse_buttons.pressed(MouseButton::Left) {
        orbit.rotate(mouse_motion.delta);
    } else if mouse_buttons.pressed(MouseButton::Right) {
        orbit.pan(mouse_motion.delta, transform.rotation);
    }

    if mouse_scroll.delta.y != 0.0 {
        orbit.zoom(mouse_scroll.delta.y);
    }

    if *orbit != before {
        *transform = orbit.transform();
    }
}

fn reset_camera_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    config: Res<SceneConfig>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    if !is_action_just_pressed(SceneAction::ResetCamera, &keyboard_input, &key_map) {
        return;
    }

    for (mut orbit, mut transform) in cameras.iter_mut() {
        *orbit = OrbitCamera::from_settings(&config.camera);
        *transform = orbit.transform();
    }
    debug!("Camera reset");
}

/// Bevy updates the projection aspect ratio and surface size together on
/// resize; this only records it.
fn log_resize_system(mut resize_events: EventReader<WindowResized>) {
    if let Some(event) = resize_events.read().last() {
        debug!("Window resized to {}x{}", event.width, event.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_reproduces_start_position() {
        let start = Vec3::new(0.0, 5.0, 30.0);
        let orbit = OrbitCamera::looking_at(start, Vec3::ZERO);
        assert!((orbit.position() - start).length() < 1e-4);
    }

    #[test]
    fn test_rotation_keeps_distance() {
        let mut orbit = OrbitCamera::looking_at(Vec3::new(0.0, 5.0, 30.0), Vec3::ZERO);
        let distance = orbit.distance;
        orbit.rotate(Vec2::new(120.0, -40.0));
        assert!((orbit.position().length() - distance).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::looking_at(Vec3::new(0.0, 5.0, 30.0), Vec3::ZERO);
        orbit.rotate(Vec2::new(0.0, 10_000.0));
        assert!(orbit.pitch <= PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_is_bounded() {
        let mut orbit = OrbitCamera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        for _ in 0..200 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.distance, MIN_DISTANCE);
        for _ in 0..200 {
            orbit.zoom(-5.0);
        }
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_pan_moves_focus() {
        let mut orbit = OrbitCamera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        orbit.pan(Vec2::new(10.0, 0.0), Quat::IDENTITY);
        assert!(orbit.focus.x < 0.0);
        assert_eq!(orbit.focus.y, 0.0);
    }
}
