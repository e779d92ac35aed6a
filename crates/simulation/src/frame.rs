//! The per-frame step.
//!
//! `run_frame` is the whole frame for the core, in a fixed order:
//!
//! ```text
//! drain commands → camera deltas → offset + carry → bouncer physics
//! ```
//!
//! Terrain is then sampled by the renderer through `WorldSession::terrain`,
//! which reads the same offset the physics step just used.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bouncers::{BouncerPopulation, StepOutcome};
use crate::fly_camera::{FlyCamera, MoveDirection, VerticalDirection};
use crate::noise_field::NoiseField;
use crate::params::{TerrainParams, WorldParams};
use crate::terrain_sampler::TerrainSampler;
use crate::world_offset::{SamplingFrame, WorldOffset};

/// Abstract input commands, already decoded from device events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    Move(MoveDirection),
    Vertical(VerticalDirection),
    Look { dx: f32, dy: f32 },
    Zoom(f32),
    StartDrag,
    StopDrag,
}

/// All mutable per-session state: camera, world offset and bouncers.
///
/// Kept in one resource so a frame can never read a fresh offset in one
/// subsystem and a stale one in another.
#[derive(Resource, Debug, Clone)]
pub struct WorldSession {
    pub camera: FlyCamera,
    pub offset: WorldOffset,
    pub bouncers: BouncerPopulation,
    terrain: TerrainParams,
    frame_count: u64,
}

impl WorldSession {
    /// Fresh session: camera at its start pose, zero offset, bouncers spawned
    /// from `params.seed`.
    pub fn new(params: &WorldParams) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        Self::with_bouncers(
            params,
            BouncerPopulation::spawn(&params.bouncers, &mut rng),
        )
    }

    pub fn with_bouncers(params: &WorldParams, bouncers: BouncerPopulation) -> Self {
        Self {
            camera: FlyCamera::new(&params.camera),
            offset: WorldOffset::default(),
            bouncers,
            terrain: params.terrain.clone(),
            frame_count: 0,
        }
    }

    pub fn terrain_params(&self) -> &TerrainParams {
        &self.terrain
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Snapshot of the current offset and density.
    pub fn sampling_frame(&self) -> SamplingFrame {
        SamplingFrame::new(self.offset, self.terrain.sampling_density)
    }

    /// Terrain sampler for the current offset snapshot.
    pub fn terrain<'a>(&'a self, field: &'a NoiseField) -> TerrainSampler<'a> {
        TerrainSampler::new(field, &self.terrain, self.sampling_frame())
    }

    /// Scroll the world under a planar camera displacement: the offset moves
    /// by `delta / offset_divisor` and every bouncer by `-delta`.
    pub fn translate(&mut self, delta: Vec2) {
        let divisor = self.camera.params().offset_divisor;
        self.offset.apply_delta(delta.x / divisor, delta.y / divisor);
        self.bouncers.carry(delta.x, delta.y);
    }

    fn apply_command(&mut self, command: CameraCommand, dt: f32) -> Vec2 {
        match command {
            CameraCommand::Move(direction) => {
                let delta = self.camera.move_planar(direction, dt);
                self.translate(delta);
                return delta;
            }
            CameraCommand::Vertical(direction) => self.camera.move_vertical(direction, dt),
            CameraCommand::Look { dx, dy } => self.camera.look_delta(dx, dy),
            CameraCommand::Zoom(amount) => self.camera.zoom_delta(amount),
            CameraCommand::StartDrag => self.camera.start_drag(),
            CameraCommand::StopDrag => self.camera.stop_drag(),
        }
        Vec2::ZERO
    }
}

/// Summary of one `run_frame` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Sum of all planar displacements applied this frame.
    pub displacement: Vec2,
    pub bounces: usize,
    pub ceiling_hits: usize,
}

/// Advance the session by one frame.
pub fn run_frame(
    session: &mut WorldSession,
    commands: impl IntoIterator<Item = CameraCommand>,
    dt: f32,
    field: &NoiseField,
) -> FrameReport {
    let mut report = FrameReport::default();

    for command in commands {
        report.displacement += session.apply_command(command, dt);
    }

    // Floor queries read the post-movement offset, same as the renderer.
    let frame = session.sampling_frame();
    let sampler = TerrainSampler::new(field, &session.terrain, frame);
    let outcomes = session
        .bouncers
        .step(dt, |x, z| sampler.height_at(x, z));

    for outcome in outcomes {
        match outcome {
            StepOutcome::Bounced => report.bounces += 1,
            StepOutcome::HitCeiling => report.ceiling_hits += 1,
            StepOutcome::Airborne => {}
        }
    }

    session.frame_count += 1;
    report
}
