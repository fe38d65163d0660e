pub mod hud;

use bevy::{diagnostic::FrameTimeDiagnosticsPlugin, prelude::*};

use crate::sets::{FrameSet, SetupSet};
use hud::{hud_text_update_system, setup_hud, toggle_hud_system};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.add_systems(Startup, setup_hud.after(SetupSet::Scene))
            .add_systems(
                Update,
                (toggle_hud_system, hud_text_update_system).in_set(FrameSet::Ui),
            );
    }
}
