pub mod data;
pub mod keyboard;

use bevy::{prelude::*, window::WindowCloseRequested};
use serde::{Deserialize, Serialize};
use shimmer_shared::FrameDriver;
use std::{collections::BTreeMap, path::Path};

use crate::sets::FrameSet;
use data::SceneAction;
use keyboard::{get_bindings, is_action_just_pressed, BINDS_PATH};

#[derive(Resource, Serialize, Deserialize)]
pub struct KeyMap {
    #[serde(default = "keyboard::default_key_map")]
    pub map: BTreeMap<SceneAction, Vec<KeyCode>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            map: keyboard::default_key_map(),
        }
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(get_bindings(Path::new(BINDS_PATH)))
            .add_systems(
                Update,
                (quit_system, stop_on_window_close).in_set(FrameSet::Input),
            );
    }
}

/// Stops the frame driver; the app exits at the end of the frame.
fn quit_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    mut driver: ResMut<FrameDriver>,
) {
    if is_action_just_pressed(SceneAction::Quit, &keyboard_input, &key_map) {
        driver.stop();
    }
}

/// Closing the window counts as a stop request, same as the quit key.
fn stop_on_window_close(
    mut close_events: EventReader<WindowCloseRequested>,
    mut driver: ResMut<FrameDriver>,
) {
    if close_events.read().next().is_some() {
        driver.stop();
    }
}
