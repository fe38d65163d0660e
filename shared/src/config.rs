//! Scene configuration stored as RON.
//!
//! Missing files are replaced by a freshly written default; unreadable or
//! malformed files are reported and the defaults are used instead.

use bevy::math::Vec3;
use bevy_ecs::resource::Resource;
use bevy_log::{error, info, warn};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::constants::*;
use crate::crystals::CrystalSettings;
use crate::lake::LakeSettings;
use crate::light::LightSettings;
use crate::model::ModelSettings;
use crate::particles::ParticleSettings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene configuration: {0}")]
    Parse(String),

    #[error("Could not serialize scene configuration: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: CAMERA_POSITION,
            target: Vec3::ZERO,
        }
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for particle and crystal placement; random when absent
    pub seed: Option<u64>,
    pub lake: LakeSettings,
    pub particles: ParticleSettings,
    pub light: LightSettings,
    pub crystals: CrystalSettings,
    pub model: ModelSettings,
    pub camera: CameraSettings,
}

impl SceneConfig {
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        ron::de::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty_config = PrettyConfig::new()
            .with_depth_limit(3)
            .with_enumerate_arrays(false);

        ron::ser::to_string_pretty(self, pretty_config)
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let serialized = self.to_ron()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        file.write_all(serialized.as_bytes())?;
        Ok(())
    }

    pub fn read_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron(&content)
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load the scene configuration, falling back to defaults.
///
/// A missing file is created with the default configuration so it can be
/// edited for the next run.
pub fn load_scene_config(path: &Path) -> SceneConfig {
    if !path.exists() {
        info!(
            "Scene configuration not found at {}, writing defaults",
            path.display()
        );
        let config = SceneConfig::default();
        if let Err(e) = config.write_to_path(path) {
            error!("{} at {}: {}", CONFIG_WRITE_ERROR, path.display(), e);
        }
        return config;
    }

    match SceneConfig::read_from_path(path) {
        Ok(config) => {
            info!("Loaded scene configuration from {}", path.display());
            config
        }
        Err(e) => {
            warn!("{} at {}: {}", CONFIG_READ_ERROR, path.display(), e);
            SceneConfig::default()
        }
    }
}
