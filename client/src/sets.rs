use bevy::prelude::*;

/// Startup ordering: the animation context must exist before the scene
/// entities that mirror it are spawned.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetupSet {
    Animation,
    Scene,
}

/// Per-frame ordering. Everything in `Sync` reads a fully updated
/// animation context.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Animate,
    Sync,
    Ui,
}
