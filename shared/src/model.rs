//! Load tracking for the externally loaded central model.
//!
//! The frame loop polls the asset backend once per frame and feeds the result
//! into [`ModelTracker::poll`]. The tracker settles exactly once: on success it
//! asks the caller to attach the model, on failure it logs the error and the
//! scene carries on without it. There is no retry and no timeout.

use bevy::math::Vec3;
use bevy_ecs::resource::Resource;
use bevy_log::{error, info};
use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Asset path of the glTF/glb file
    pub path: String,
    pub position: Vec3,
    pub scale: f32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: MODEL_PATH.to_string(),
            position: MODEL_POSITION,
            scale: MODEL_SCALE,
        }
    }
}

/// The model could not be fetched or parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Failed to load model '{path}': {reason}")]
pub struct ModelLoadError {
    pub path: String,
    pub reason: String,
}

/// Backend-neutral view of an asset's load state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadProgress {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModelStatus {
    Pending,
    Attached,
    Failed(ModelLoadError),
}

/// What the caller must do after a poll.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelAction {
    Attach,
    Skip,
}

#[derive(Resource, Debug, Clone)]
pub struct ModelTracker {
    path: String,
    status: ModelStatus,
}

impl ModelTracker {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: ModelStatus::Pending,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn status(&self) -> &ModelStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == ModelStatus::Pending
    }

    /// Feed the latest load state. Returns the action to take, or `None` if
    /// loading is still in flight or the tracker has already settled.
    pub fn poll(&mut self, progress: LoadProgress) -> Option<ModelAction> {
        if !self.is_pending() {
            return None;
        }

        match progress {
            LoadProgress::Loading => None,
            LoadProgress::Loaded => {
                info!("Model loaded: {}", self.path);
                self.status = ModelStatus::Attached;
                Some(ModelAction::Attach)
            }
            LoadProgress::Failed(reason) => {
                let err = ModelLoadError {
                    path: self.path.clone(),
                    reason,
                };
                error!("{}", err);
                self.status = ModelStatus::Failed(err);
                Some(ModelAction::Skip)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_load_attaches_once() {
        let mut tracker = ModelTracker::new("models/test.glb");
        assert_eq!(tracker.poll(LoadProgress::Loading), None);
        assert_eq!(tracker.poll(LoadProgress::Loaded), Some(ModelAction::Attach));
        assert_eq!(tracker.status(), &ModelStatus::Attached);
        assert_eq!(tracker.poll(LoadProgress::Loaded), None);
    }

    #[test]
    fn test_failed_load_leaves_scene_unchanged() {
        let mut scene: Vec<&str> = vec!["lake", "particles", "light"];
        let before = scene.len();
        let mut tracker = ModelTracker::new("models/missing.glb");

        for progress in [
            LoadProgress::Loading,
            LoadProgress::Failed("file not found".to_string()),
            LoadProgress::Loaded,
        ] {
            if let Some(ModelAction::Attach) = tracker.poll(progress) {
                scene.push("model");
            }
        }

        assert_eq!(scene.len(), before);
        match tracker.status() {
            ModelStatus::Failed(err) => {
                assert_eq!(err.path, "models/missing.glb");
                assert!(err.to_string().contains("file not found"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_pending_forever_without_progress() {
        let mut tracker = ModelTracker::new("models/slow.glb");
        for _ in 0..100 {
            assert_eq!(tracker.poll(LoadProgress::Loading), None);
        }
        assert!(tracker.is_pending());
    }
}
