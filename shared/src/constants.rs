use bevy::math::Vec3;

pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_MIN_RADIUS: f32 = 10.0;
pub const PARTICLE_MAX_RADIUS: f32 = 20.0;
pub const PARTICLE_MIN_HEIGHT: f32 = -2.5;
pub const PARTICLE_MAX_HEIGHT: f32 = 2.5;
pub const PARTICLE_MIN_SPEED: f32 = 0.001;
pub const PARTICLE_MAX_SPEED: f32 = 0.003;
pub const PARTICLE_COLOR: u32 = 0x87cefa;
/// Diameter of a drawn particle, in world units
pub const PARTICLE_SIZE: f32 = 0.2;

pub const LAKE_SIZE: f32 = 100.0;
pub const LAKE_SEGMENTS: u32 = 200;
pub const LAKE_BASE_COLOR: u32 = 0x1e90ff;
pub const LAKE_HIGHLIGHT_COLOR: u32 = 0x87cefa;

pub const LIGHT_ORBIT_RADIUS: f32 = 10.0;
pub const LIGHT_ORBIT_HEIGHT: f32 = 10.0;
pub const LIGHT_ANGULAR_SPEED: f32 = 0.5;
pub const LIGHT_COLOR: u32 = 0x8a2be2;
pub const LIGHT_RANGE: f32 = 50.0;
pub const AMBIENT_COLOR: u32 = 0x404040;

pub const CRYSTAL_COUNT: usize = 30;
pub const CRYSTAL_SPREAD: f32 = 50.0;
pub const CRYSTAL_MAX_HEIGHT: f32 = 5.0;
pub const CRYSTAL_COLOR: u32 = 0x7fffd4;

pub const MODEL_PATH: &str = "models/magmoor.glb";
pub const MODEL_POSITION: Vec3 = Vec3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};
pub const MODEL_SCALE: f32 = 5.0;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3 {
    x: 0.0,
    y: 5.0,
    z: 30.0,
};

pub const CONFIG_FILE_NAME: &str = "shimmerlake.ron";
pub const CONFIG_READ_ERROR: &str = "Failed to read scene configuration";
pub const CONFIG_WRITE_ERROR: &str = "Failed to write default scene configuration";
