use crate::input::{data::SceneAction, KeyMap};
use bevy::prelude::*;
use ron::{from_str, ser::PrettyConfig};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::Path,
};

pub const BINDS_PATH: &str = "keybinds.ron";

fn write_keybindings_to_path(key_map: &KeyMap, binds_path: &Path) -> Result<(), std::io::Error> {
    let pretty_config = PrettyConfig::new()
        .with_depth_limit(3)
        .with_separate_tuple_members(true)
        .with_enumerate_arrays(true);

    let serialized = ron::ser::to_string_pretty(key_map, pretty_config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    if let Some(parent) = binds_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(binds_path)?;
    file.write_all(serialized.as_bytes())
}

pub fn is_action_just_pressed(
    action: SceneAction,
    keyboard_input: &ButtonInput<KeyCode>,
    key_map: &KeyMap,
) -> bool {
    key_map
        .map
        .get(&action)
        .is_some_and(|keys| keyboard_input.any_just_pressed(keys.iter().copied()))
}

pub(crate) fn default_key_map() -> BTreeMap<SceneAction, Vec<KeyCode>> {
    let mut map = BTreeMap::new();
    map.insert(SceneAction::Quit, vec![KeyCode::Escape]);
    map.insert(SceneAction::ResetCamera, vec![KeyCode::KeyR, KeyCode::Home]);
    map.insert(SceneAction::ToggleHud, vec![KeyCode::F3]);
    map.insert(SceneAction::ToggleParticles, vec![KeyCode::KeyP]);
    map.insert(SceneAction::ToggleCrystals, vec![KeyCode::KeyC]);
    map
}

/// Read the key bindings, writing the defaults out when none exist yet.
pub fn get_bindings(binds_path: &Path) -> KeyMap {
    if let Ok(content) = fs::read_to_string(binds_path) {
        match from_str::<KeyMap>(&content) {
            Ok(key_map) => return key_map,
            Err(e) => warn!("Ignoring invalid keybindings at {:?}: {}", binds_path, e),
        }
        return KeyMap::default();
    }

    let key_map = KeyMap::default();
    if let Err(e) = write_keybindings_to_path(&key_map, binds_path) {
        error!(
            "Failed to create default keybindings file at {:?}: {}",
            binds_path, e
        );
    }
    key_map
}
