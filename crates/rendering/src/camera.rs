use bevy::prelude::*;

use simulation::fly_camera::FlyCamera;
use simulation::frame::WorldSession;

/// The single view camera, driven entirely by `WorldSession::camera`.
#[derive(Component)]
pub struct ViewCamera;

pub fn setup_camera(mut commands: Commands, session: Res<WorldSession>) {
    let camera = &session.camera;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective_of(camera)),
        camera_transform(camera),
        ViewCamera,
    ));
}

/// Eye at the camera position, looking along yaw/pitch with +Y up.
pub fn camera_transform(camera: &FlyCamera) -> Transform {
    Transform::from_translation(camera.position).looking_to(camera.look_direction(), Vec3::Y)
}

fn perspective_of(camera: &FlyCamera) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: camera.fov_radians(),
        near: camera.params().near_plane,
        far: camera.params().far_plane,
        ..default()
    }
}

/// System: apply the session camera to the actual camera Transform and
/// projection each frame. Aspect ratio is left to bevy's viewport handling.
pub fn sync_view_camera(
    session: Res<WorldSession>,
    mut query: Query<(&mut Transform, &mut Projection), With<ViewCamera>>,
) {
    if !session.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };
    let camera = &session.camera;
    *transform = camera_transform(camera);
    if let Projection::Perspective(ref mut perspective) = *projection {
        perspective.fov = camera.fov_radians();
        perspective.near = camera.params().near_plane;
        perspective.far = camera.params().far_plane;
    }
}
