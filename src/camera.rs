//! Orbit camera for viewing the solar system.
//!
//! A perspective camera constrained to a sphere around the origin: arrow
//! keys adjust yaw and pitch, the scroll wheel adjusts distance. The Sun
//! stays centered; there is no free-fly or pan.

use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::prelude::*;

/// Closest allowed camera distance, in render units.
pub const MIN_DISTANCE: f32 = 5.0;

/// Furthest allowed camera distance (Neptune at 30 AU is ~600 units).
pub const MAX_DISTANCE: f32 = 1500.0;

/// Starting distance showing roughly the inner solar system.
pub const DEFAULT_DISTANCE: f32 = 60.0;

/// Yaw/pitch speed in radians per second while an arrow key is held.
pub const ROTATE_SPEED: f32 = 1.2;

/// Distance change per scroll unit, as a fraction of current distance.
pub const ZOOM_SPEED: f32 = 0.1;

/// Pitch limit keeping the camera off the poles, where yaw degenerates.
const MAX_PITCH: f32 = 1.54;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical coordinates of the camera around the origin.
#[derive(Resource, Debug)]
pub struct CameraRig {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.6,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl CameraRig {
    /// Cartesian camera position for the current spherical coordinates.
    pub fn translation(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        )
    }
}

/// Plugin providing the orbit camera and its controls.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_rotate, camera_zoom, apply_rig).chain());
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(rig.translation()).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Arrow keys adjust yaw and pitch while held.
fn camera_rotate(keys: Res<ButtonInput<KeyCode>>, time: Res<Time>, mut rig: ResMut<CameraRig>) {
    let step = ROTATE_SPEED * time.delta_secs();

    if keys.pressed(KeyCode::ArrowLeft) {
        rig.yaw -= step;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        rig.yaw += step;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        rig.pitch = (rig.pitch + step).min(MAX_PITCH);
    }
    if keys.pressed(KeyCode::ArrowDown) {
        rig.pitch = (rig.pitch - step).max(-MAX_PITCH);
    }
}

/// Scroll wheel zooms by scaling the distance logarithmically.
fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut rig: ResMut<CameraRig>) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    rig.distance = (rig.distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
}

/// Write the rig's spherical coordinates back to the camera transform.
fn apply_rig(rig: Res<CameraRig>, mut camera: Query<&mut Transform, With<MainCamera>>) {
    if !rig.is_changed() {
        return;
    }
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };
    *transform = Transform::from_translation(rig.translation()).looking_at(Vec3::ZERO, Vec3::Y);
}
