//! Device events → `CameraCommand`s.
//!
//! Every system here only pushes into `PendingCameraCommands`; nothing reads
//! or writes the session directly. They all run in `FrameSet::Input`.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use simulation::fly_camera::{MoveDirection, VerticalDirection};
use simulation::frame::CameraCommand;
use simulation::PendingCameraCommands;

const PLANAR_KEYS: [(KeyCode, MoveDirection); 4] = [
    (KeyCode::KeyW, MoveDirection::Forward),
    (KeyCode::KeyS, MoveDirection::Backward),
    (KeyCode::KeyA, MoveDirection::Left),
    (KeyCode::KeyD, MoveDirection::Right),
];

const VERTICAL_KEYS: [(KeyCode, VerticalDirection); 2] = [
    (KeyCode::KeyQ, VerticalDirection::Up),
    (KeyCode::KeyE, VerticalDirection::Down),
];

/// W/A/S/D: planar moves (scroll the world). Q/E: camera height.
/// Held keys emit one command per frame.
pub fn keyboard_commands(
    keys: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingCameraCommands>,
) {
    for (key, direction) in PLANAR_KEYS {
        if keys.pressed(key) {
            pending.push(CameraCommand::Move(direction));
        }
    }
    for (key, direction) in VERTICAL_KEYS {
        if keys.pressed(key) {
            pending.push(CameraCommand::Vertical(direction));
        }
    }
}

/// Left button press/release toggles mouse-look; motion is forwarded as-is
/// and the camera decides whether a drag is active.
pub fn mouse_look_commands(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut pending: ResMut<PendingCameraCommands>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        pending.push(CameraCommand::StartDrag);
    }

    let delta: Vec2 = motion.read().map(|evt| evt.delta).sum();
    if delta != Vec2::ZERO {
        pending.push(CameraCommand::Look {
            dx: delta.x,
            dy: delta.y,
        });
    }

    if buttons.just_released(MouseButton::Left) {
        pending.push(CameraCommand::StopDrag);
    }
}

/// Scroll wheel: zoom (change field of view). Scrolling up narrows the view.
pub fn scroll_zoom_commands(
    mut scroll_evts: EventReader<MouseWheel>,
    mut pending: ResMut<PendingCameraCommands>,
) {
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        if dy != 0.0 {
            pending.push(CameraCommand::Zoom(dy));
        }
    }
}
