use bevy::prelude::*;

use simulation::simulation_sets::FrameSet;

pub mod bouncer_render;
pub mod camera;
pub mod input;
pub mod terrain_render;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                camera::setup_camera,
                setup_lighting,
                terrain_render::spawn_terrain_tiles,
                bouncer_render::spawn_bouncer_sprites,
            )
                .chain()
                .after(simulation::world_init::init_world),
        )
        .add_systems(
            Update,
            (
                input::keyboard_commands,
                input::mouse_look_commands,
                input::scroll_zoom_commands,
            )
                .chain()
                .in_set(FrameSet::Input),
        )
        .add_systems(
            Update,
            (
                camera::sync_view_camera,
                terrain_render::update_terrain_tiles,
                bouncer_render::update_bouncer_sprites,
            )
                .in_set(FrameSet::Present),
        );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4, // 45 degrees down
            std::f32::consts::FRAC_PI_6,  // slight rotation
            0.0,
        )),
    ));
}
