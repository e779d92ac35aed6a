//! Scrolling noise-domain origin.
//!
//! The observer and the bouncers stay near the world origin; moving the camera
//! slides the sampling window across the noise field instead. Offsets grow
//! without bound over a session, which is fine because they only index into a
//! continuous field, never into a buffer.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Translation added to every noise-domain lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldOffset {
    pub x: f32,
    pub y: f32,
}

impl WorldOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `x += dx`, `y += dz`. No clamping.
    pub fn apply_delta(&mut self, dx: f32, dz: f32) {
        self.x += dx;
        self.y += dz;
    }
}

/// One frame's view into the noise field: an offset snapshot plus the
/// world-to-noise density.
///
/// This is the only place world positions become noise coordinates. Terrain
/// placements and bouncer floor queries both go through [`to_noise`], so the
/// two can never disagree on axis order or offset.
///
/// [`to_noise`]: SamplingFrame::to_noise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingFrame {
    pub offset: WorldOffset,
    pub density: f32,
}

impl SamplingFrame {
    pub fn new(offset: WorldOffset, density: f32) -> Self {
        Self { offset, density }
    }

    /// World x maps to noise x, world z maps to noise y.
    #[inline]
    pub fn to_noise(&self, world_x: f32, world_z: f32) -> Vec2 {
        Vec2::new(
            world_x * self.density + self.offset.x,
            world_z * self.density + self.offset.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta_accumulates() {
        let mut offset = WorldOffset::default();
        offset.apply_delta(0.5, -0.25);
        offset.apply_delta(0.5, -0.25);
        assert_eq!(offset, WorldOffset::new(1.0, -0.5));
    }

    #[test]
    fn test_offsets_are_not_clamped() {
        let mut offset = WorldOffset::default();
        for _ in 0..1000 {
            offset.apply_delta(1000.0, -1000.0);
        }
        assert_eq!(offset.x, 1_000_000.0);
        assert_eq!(offset.y, -1_000_000.0);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = WorldOffset::default();
        let b = WorldOffset::default();
        a.apply_delta(3.0, 4.0);
        assert_eq!(b, WorldOffset::default());
    }

    #[test]
    fn test_axis_convention_is_direct() {
        let frame = SamplingFrame::new(WorldOffset::new(10.0, 20.0), 0.5);
        assert_eq!(frame.to_noise(2.0, 4.0), Vec2::new(11.0, 22.0));
        assert_eq!(frame.to_noise(0.0, 0.0), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_offset_shift_matches_world_shift() {
        // Shifting the offset by d * density is the same lookup as moving the
        // world position by d.
        let density = 0.025;
        let before = SamplingFrame::new(WorldOffset::new(1.0, 2.0), density);
        let mut shifted = before.offset;
        shifted.apply_delta(8.0 * density, -4.0 * density);
        let after = SamplingFrame::new(shifted, density);

        let a = before.to_noise(8.0 + 3.0, -4.0 + 5.0);
        let b = after.to_noise(3.0, 5.0);
        assert!((a - b).length() < 1e-5, "{a} vs {b}");
    }
}
