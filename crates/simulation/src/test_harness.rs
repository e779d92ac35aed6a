//! # TestWorld: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` with a fixed frame time so
//! integration tests can push commands, advance frames and inspect the session
//! without a window or renderer.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::bouncers::{Bouncer, BouncerPopulation};
use crate::frame::{CameraCommand, FrameReport, WorldSession};
use crate::noise_field::NoiseField;
use crate::params::WorldParams;
use crate::world_init::SkipWorldInit;
use crate::{LastFrame, PendingCameraCommands, SimulationPlugin};

/// Frame time used by every `TestWorld` update.
pub const TEST_FRAME: Duration = Duration::from_millis(16);

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestWorld {
    app: App,
}

impl TestWorld {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// World built by the regular `init_world` path from default parameters.
    pub fn new() -> Self {
        Self::with_params(WorldParams::default())
    }

    pub fn with_params(params: WorldParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(TEST_FRAME));
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);
        // Startup runs here; the first frame has zero elapsed time.
        app.update();
        Self { app }
    }

    /// World with a hand-placed bouncer population instead of a random spawn.
    pub fn with_bouncers(bouncers: Vec<Bouncer>) -> Self {
        let params = WorldParams::default();
        let population = BouncerPopulation::from_bouncers(bouncers, &params.bouncers);

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(TEST_FRAME));
        app.insert_resource(SkipWorldInit);
        app.insert_resource(NoiseField::new(params.noise_seed));
        app.insert_resource(WorldSession::with_bouncers(&params, population));
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn push(&mut self, command: CameraCommand) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<PendingCameraCommands>()
            .push(command);
        self
    }

    /// Run `frames` updates of `TEST_FRAME` each.
    pub fn tick(&mut self, frames: u32) -> &mut Self {
        for _ in 0..frames {
            self.app.update();
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn session(&self) -> &WorldSession {
        self.app.world().resource::<WorldSession>()
    }

    pub fn session_mut(&mut self) -> Mut<'_, WorldSession> {
        self.app.world_mut().resource_mut::<WorldSession>()
    }

    pub fn field(&self) -> &NoiseField {
        self.app.world().resource::<NoiseField>()
    }

    pub fn last_frame(&self) -> &FrameReport {
        &self.app.world().resource::<LastFrame>().0
    }

    pub fn pending_commands(&self) -> usize {
        self.app.world().resource::<PendingCameraCommands>().0.len()
    }

    pub fn bouncer_positions(&self) -> Vec<Vec3> {
        self.session()
            .bouncers
            .bouncers()
            .iter()
            .map(|b| b.position)
            .collect()
    }

    /// Terrain height under a world position through the current offset.
    pub fn floor_at(&self, world_x: f32, world_z: f32) -> f32 {
        self.session().terrain(self.field()).height_at(world_x, world_z)
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}
