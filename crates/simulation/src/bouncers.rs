//! Fixed population of bouncing creatures anchored to the scrolling terrain.
//!
//! Only vertical motion is integrated. Horizontal motion comes exclusively from
//! the carry step, which moves every bouncer opposite to the camera so it stays
//! over the same terrain feature while the sampling window slides.

use bevy::prelude::*;
use rand::Rng;

use crate::params::BouncerParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bouncer {
    /// World space, y is up.
    pub position: Vec3,
    /// Negative while falling.
    pub vertical_velocity: f32,
}

impl Bouncer {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
        }
    }
}

/// What happened to one bouncer during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Airborne,
    HitCeiling,
    Bounced,
}

/// Owns the bouncers and their physics constants. The population size is
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct BouncerPopulation {
    bouncers: Vec<Bouncer>,
    params: BouncerParams,
}

impl BouncerPopulation {
    /// Spawn `params.count` bouncers at rest, x/z and y drawn uniformly from
    /// the configured spawn ranges.
    pub fn spawn<R: Rng>(params: &BouncerParams, rng: &mut R) -> Self {
        let (h_min, h_max) = params.spawn_horizontal;
        let (y_min, y_max) = params.spawn_height;
        let bouncers = (0..params.count)
            .map(|_| {
                Bouncer::at(Vec3::new(
                    rng.gen_range(h_min..h_max),
                    rng.gen_range(y_min..y_max),
                    rng.gen_range(h_min..h_max),
                ))
            })
            .collect();
        Self {
            bouncers,
            params: params.clone(),
        }
    }

    pub fn from_bouncers(bouncers: Vec<Bouncer>, params: &BouncerParams) -> Self {
        Self {
            bouncers,
            params: params.clone(),
        }
    }

    pub fn bouncers(&self) -> &[Bouncer] {
        &self.bouncers
    }

    pub fn len(&self) -> usize {
        self.bouncers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bouncers.is_empty()
    }

    pub fn params(&self) -> &BouncerParams {
        &self.params
    }

    /// Shift every bouncer by `(-dx, -dz)` on the x/z plane. Called with the
    /// same planar camera displacement that advanced the world offset.
    pub fn carry(&mut self, dx: f32, dz: f32) {
        for b in &mut self.bouncers {
            b.position.x -= dx;
            b.position.z -= dz;
        }
    }

    /// Advance every bouncer by `dt` seconds. `floor(x, z)` returns the
    /// terrain height under a world position for the current frame.
    pub fn step<F>(&mut self, dt: f32, floor: F) -> Vec<StepOutcome>
    where
        F: Fn(f32, f32) -> f32,
    {
        let params = &self.params;
        self.bouncers
            .iter_mut()
            .map(|b| integrate(b, params, dt, &floor))
            .collect()
    }
}

/// One bouncer, one step: integrate, clamp to the ceiling, resolve the floor.
fn integrate<F>(b: &mut Bouncer, params: &BouncerParams, dt: f32, floor: &F) -> StepOutcome
where
    F: Fn(f32, f32) -> f32,
{
    b.position.y += b.vertical_velocity * dt;
    b.vertical_velocity += params.gravity * dt;

    if b.position.y > params.ceiling {
        b.position.y = params.ceiling;
        b.vertical_velocity = 0.0;
        return StepOutcome::HitCeiling;
    }

    let floor_y = floor(b.position.x, b.position.z);
    if b.position.y - params.radius <= floor_y && b.vertical_velocity < 0.0 {
        b.position.y = floor_y + params.radius;
        // Fixed launch speed, not restitution-scaled.
        b.vertical_velocity = params.bounce_speed;
        return StepOutcome::Bounced;
    }

    StepOutcome::Airborne
}
