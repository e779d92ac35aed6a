use bevy::prelude::*;

pub mod bouncers;
pub mod config;
pub mod fly_camera;
pub mod frame;
pub mod noise_field;
pub mod params;
pub mod params_error;
pub mod region;
pub mod simulation_sets;
pub mod terrain_sampler;
pub mod world_init;
pub mod world_offset;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use frame::{run_frame, CameraCommand, FrameReport, WorldSession};
use noise_field::NoiseField;
use params::WorldParams;
use simulation_sets::FrameSet;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Commands decoded from input this frame, drained by `advance_world`.
#[derive(Resource, Default, Debug)]
pub struct PendingCameraCommands(pub Vec<CameraCommand>);

impl PendingCameraCommands {
    pub fn push(&mut self, command: CameraCommand) {
        self.0.push(command);
    }
}

/// Report of the most recent `advance_world` run.
#[derive(Resource, Default, Debug)]
pub struct LastFrame(pub FrameReport);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldParams>()
            .init_resource::<PendingCameraCommands>()
            .init_resource::<LastFrame>()
            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Advance, FrameSet::Present).chain(),
            )
            .add_systems(Startup, world_init::init_world)
            .add_systems(Update, advance_world.in_set(FrameSet::Advance));
    }
}

/// Run one frame of the core with this frame's elapsed time.
pub fn advance_world(
    time: Res<Time>,
    field: Res<NoiseField>,
    mut session: ResMut<WorldSession>,
    mut pending: ResMut<PendingCameraCommands>,
    mut last: ResMut<LastFrame>,
) {
    let report = run_frame(&mut session, pending.0.drain(..), time.delta_secs(), &field);

    if report.displacement != Vec2::ZERO {
        debug!(
            "world scrolled by {}, offset now ({:.4}, {:.4})",
            report.displacement, session.offset.x, session.offset.y
        );
        for (i, b) in session.bouncers.bouncers().iter().enumerate() {
            trace!("bouncer {} carried to {}", i, b.position);
        }
    }
    if report.bounces > 0 {
        debug!(
            "frame {}: {} bounce(s)",
            session.frame_count(),
            report.bounces
        );
    }

    last.0 = report;
}
