use bevy::prelude::*;

use simulation::frame::WorldSession;

/// Mesh for the bouncer at `index` in the population.
#[derive(Component)]
pub struct BouncerSprite {
    pub index: usize,
}

pub fn spawn_bouncer_sprites(
    mut commands: Commands,
    session: Res<WorldSession>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = session.bouncers.params().radius;
    let mesh = meshes.add(Sphere::new(radius).mesh().uv(24, 16));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.85, 0.35),
        perceptual_roughness: 0.4,
        ..default()
    });

    for (index, b) in session.bouncers.bouncers().iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(b.position),
            BouncerSprite { index },
        ));
    }
}

pub fn update_bouncer_sprites(
    session: Res<WorldSession>,
    mut query: Query<(&BouncerSprite, &mut Transform)>,
) {
    if !session.is_changed() {
        return;
    }
    let bouncers = session.bouncers.bouncers();
    for (sprite, mut transform) in &mut query {
        if let Some(b) = bouncers.get(sprite.index) {
            transform.translation = b.position;
        }
    }
}
