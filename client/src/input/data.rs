use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SceneAction {
    Quit,
    ResetCamera,
    ToggleHud,
    ToggleParticles,
    ToggleCrystals,
}
