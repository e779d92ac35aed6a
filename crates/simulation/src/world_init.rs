// =============================================================================
// Session bootstrap: noise field, camera, offset and the bouncer population.
// =============================================================================

use bevy::prelude::*;

use crate::frame::WorldSession;
use crate::noise_field::NoiseField;
use crate::params::WorldParams;

/// Marker resource that, when present, causes `init_world` to leave existing
/// `NoiseField` / `WorldSession` resources alone. The test harness inserts its
/// own hand-built session this way.
#[derive(Resource)]
pub struct SkipWorldInit;

pub fn init_world(
    mut commands: Commands,
    params: Res<WorldParams>,
    skip: Option<Res<SkipWorldInit>>,
) {
    if skip.is_some() {
        return;
    }

    let field = NoiseField::new(params.noise_seed);
    let session = WorldSession::new(&params);

    info!(
        "World initialized: {} bouncers (seed {}), noise seed {}, {}x{} terrain cells",
        session.bouncers.len(),
        params.seed,
        field.seed(),
        params.terrain.cells_per_side(),
        params.terrain.cells_per_side(),
    );
    for (i, b) in session.bouncers.bouncers().iter().enumerate() {
        trace!("bouncer {} spawned at {}", i, b.position);
    }

    commands.insert_resource(field);
    commands.insert_resource(session);
}
