use bevy::{asset::LoadState, gltf::Gltf, prelude::*};
use shimmer_shared::{
    model::{LoadProgress, ModelAction, ModelTracker},
    SceneConfig,
};

#[derive(Component)]
pub struct CentralModel;

/// Handle of the model while it is being loaded.
#[derive(Resource)]
pub struct PendingModel {
    pub handle: Handle<Gltf>,
}

pub fn request_model(mut commands: Commands, asset_server: Res<AssetServer>, config: Res<SceneConfig>) {
    let path = config.model.path.clone();
    info!("Requesting model {}", path);

    commands.insert_resource(PendingModel {
        handle: asset_server.load(path.clone()),
    });
    commands.insert_resource(ModelTracker::new(path));
}

/// Map Bevy's load state onto the tracker's view of it.
pub fn load_progress(state: Option<LoadState>) -> LoadProgress {
    match state {
        Some(LoadState::Loaded) => LoadProgress::Loaded,
        Some(LoadState::Failed(err)) => LoadProgress::Failed(err.to_string()),
        Some(LoadState::NotLoaded) | Some(LoadState::Loading) => LoadProgress::Loading,
        None => LoadProgress::Failed("asset handle is not tracked by the asset server".into()),
    }
}

pub fn poll_model_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    config: Res<SceneConfig>,
    pending: Option<Res<PendingModel>>,
    tracker: Option<ResMut<ModelTracker>>,
) {
    let (Some(pending), Some(mut tracker)) = (pending, tracker) else {
        return;
    };
    if !tracker.is_pending() {
        return;
    }

    let progress = load_progress(asset_server.get_load_state(pending.handle.id()));

    match tracker.poll(progress) {
        Some(ModelAction::Attach) => {
            let scene = gltfs
                .get(&pending.handle)
                .and_then(|gltf| gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned()));

            match scene {
                Some(scene) => {
                    commands.spawn((
                        CentralModel,
                        SceneRoot(scene),
                        Transform::from_translation(config.model.position)
                            .with_scale(Vec3::splat(config.model.scale)),
                    ));
                }
                None => warn!("Model {} has no scenes to display", tracker.path()),
            }
            commands.remove_resource::<PendingModel>();
        }
        Some(ModelAction::Skip) => {
            commands.remove_resource::<PendingModel>();
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetLoadError;
    use shimmer_shared::model::{ModelSettings, ModelStatus};
    use std::{sync::Arc, thread, time::Duration};

    #[test]
    fn test_load_progress_mapping() {
        assert_eq!(load_progress(Some(LoadState::Loading)), LoadProgress::Loading);
        assert_eq!(load_progress(Some(LoadState::NotLoaded)), LoadProgress::Loading);
        assert_eq!(load_progress(Some(LoadState::Loaded)), LoadProgress::Loaded);
        assert!(matches!(load_progress(None), LoadProgress::Failed(_)));
    }

    #[test]
    fn test_load_progress_carries_failure_reason() {
        let error = AssetLoadError::MissingAssetLoader {
            loader_name: None,
            asset_type_id: None,
            extension: None,
            asset_path: Some("models/broken.glb".to_string()),
        };

        match load_progress(Some(LoadState::Failed(Arc::new(error)))) {
            LoadProgress::Failed(reason) => assert!(reason.contains("models/broken.glb"), "{reason}"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_model_leaves_scene_unchanged() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Gltf>()
            .insert_resource(SceneConfig {
                model: ModelSettings {
                    path: "models/does_not_exist.glb".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .add_systems(Startup, request_model)
            .add_systems(Update, poll_model_load);

        app.update();
        let entities_before = app.world().entities().len();

        // Asset IO runs on the task pool, give it time to report the failure
        for _ in 0..500 {
            if !app.world().resource::<ModelTracker>().is_pending() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
            app.update();
        }

        let tracker = app.world().resource::<ModelTracker>();
        match tracker.status() {
            ModelStatus::Failed(err) => assert_eq!(err.path, "models/does_not_exist.glb"),
            other => panic!("expected failure, got {other:?}"),
        }

        app.update();
        assert!(app.world().get_resource::<PendingModel>().is_none());
        assert_eq!(app.world().entities().len(), entities_before);

        let world = app.world_mut();
        let models = world.query::<&CentralModel>().iter(world).count();
        assert_eq!(models, 0);
    }
}
