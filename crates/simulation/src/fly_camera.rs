use bevy::prelude::*;

use crate::params::CameraParams;

/// Planar movement directions relative to the camera's yaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalDirection {
    Up,
    Down,
}

impl VerticalDirection {
    fn sign(self) -> f32 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}

/// Free-fly observer: position, yaw/pitch, field of view and the drag flag
/// that gates mouse-look.
///
/// Yaw is measured in the x/z plane from +X toward +Z; pitch is positive when
/// looking up. The camera never translates horizontally itself: planar moves
/// are returned to the caller, which scrolls the world instead.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_degrees: f32,
    dragging: bool,
    params: CameraParams,
}

impl FlyCamera {
    pub fn new(params: &CameraParams) -> Self {
        Self {
            position: Vec3::from_array(params.start_position),
            yaw: params.start_yaw,
            pitch: params.start_pitch.clamp(-params.pitch_limit, params.pitch_limit),
            fov_degrees: params
                .fov_degrees
                .clamp(params.min_fov_degrees, params.max_fov_degrees),
            dragging: false,
            params: params.clone(),
        }
    }

    pub fn params(&self) -> &CameraParams {
        &self.params
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Unit forward vector projected onto the ground plane.
    pub fn planar_forward(&self) -> Vec2 {
        Vec2::new(self.yaw.cos(), self.yaw.sin())
    }

    /// Unit right vector on the ground plane (forward x up).
    pub fn planar_right(&self) -> Vec2 {
        Vec2::new(-self.yaw.sin(), self.yaw.cos())
    }

    /// Full 3-D look direction for building the view matrix.
    pub fn look_direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
    }

    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Planar displacement `(dx, dz)` for moving `direction` for `dt` seconds.
    /// Does not change the camera; the caller applies it to the world.
    pub fn move_planar(&self, direction: MoveDirection, dt: f32) -> Vec2 {
        let axis = match direction {
            MoveDirection::Forward => self.planar_forward(),
            MoveDirection::Backward => -self.planar_forward(),
            MoveDirection::Right => self.planar_right(),
            MoveDirection::Left => -self.planar_right(),
        };
        axis * self.params.move_speed * dt
    }

    /// Raise or lower the camera. Only the camera height changes.
    pub fn move_vertical(&mut self, direction: VerticalDirection, dt: f32) {
        self.position.y += direction.sign() * self.params.vertical_speed * dt;
    }

    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    /// Rotate by a screen-space pointer delta. No-op unless dragging.
    pub fn look_delta(&mut self, screen_dx: f32, screen_dy: f32) {
        if !self.dragging {
            return;
        }
        let s = self.params.look_sensitivity;
        self.yaw = (self.yaw + screen_dx * s).rem_euclid(std::f32::consts::TAU);
        // Screen y grows downward.
        self.pitch = (self.pitch - screen_dy * s)
            .clamp(-self.params.pitch_limit, self.params.pitch_limit);
    }

    /// Positive `amount` zooms in (narrows the field of view).
    pub fn zoom_delta(&mut self, amount: f32) {
        self.fov_degrees = (self.fov_degrees - amount * self.params.zoom_sensitivity)
            .clamp(self.params.min_fov_degrees, self.params.max_fov_degrees);
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(&CameraParams::default())
    }
}
