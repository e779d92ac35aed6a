use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::params::WorldParams;

/// Environment variable naming an optional JSON parameter file.
const PARAMS_ENV: &str = "BOUNDLESS_PARAMS";

/// Where the running `WorldParams` came from, reported once the logger is up.
#[derive(Resource, Debug)]
enum ParamsSource {
    Defaults,
    File(PathBuf),
    Fallback { path: PathBuf, error: String },
}

fn load_params() -> (WorldParams, ParamsSource) {
    let Some(path) = std::env::var_os(PARAMS_ENV).map(PathBuf::from) else {
        return (WorldParams::default(), ParamsSource::Defaults);
    };
    match WorldParams::load(&path) {
        Ok(params) => (params, ParamsSource::File(path)),
        Err(e) => (
            WorldParams::default(),
            ParamsSource::Fallback {
                path,
                error: e.to_string(),
            },
        ),
    }
}

fn report_params_source(source: Res<ParamsSource>) {
    match source.as_ref() {
        ParamsSource::Defaults => info!("Using default world parameters"),
        ParamsSource::File(path) => info!("Loaded world parameters from {}", path.display()),
        ParamsSource::Fallback { path, error } => warn!(
            "Failed to load world parameters from {}: {}. Using defaults.",
            path.display(),
            error
        ),
    }
}

fn main() {
    let (params, source) = load_params();

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Boundless".to_string(),
                    resolution: (1280.0, 720.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "info,wgpu=error,naga=warn,simulation=debug".to_string(),
                ..default()
            }),
    )
    .insert_resource(params)
    .insert_resource(source)
    .add_systems(Startup, report_params_source)
    .add_plugins((simulation::SimulationPlugin, rendering::RenderingPlugin));

    app.run();
}
