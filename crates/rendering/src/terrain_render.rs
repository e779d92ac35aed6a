use std::collections::HashMap;

use bevy::prelude::*;

use simulation::frame::WorldSession;
use simulation::noise_field::NoiseField;
use simulation::region::RegionType;

/// One cube of the terrain window. `index` is the row-major position of the
/// cell in `TerrainSampler::placements`.
#[derive(Component)]
pub struct TerrainTile {
    pub index: usize,
}

/// One material per terrain category. Categories without an entry render
/// with the water material.
#[derive(Resource)]
pub struct RegionMaterials {
    water: Handle<StandardMaterial>,
    by_region: HashMap<RegionType, Handle<StandardMaterial>>,
}

impl RegionMaterials {
    pub fn get(&self, region: RegionType) -> &Handle<StandardMaterial> {
        self.by_region.get(&region).unwrap_or(&self.water)
    }
}

pub fn region_color(region: RegionType) -> Color {
    match region {
        RegionType::Water => Color::srgb(0.16, 0.38, 0.72),
        RegionType::Sand => Color::srgb(0.86, 0.79, 0.55),
        RegionType::Grass => Color::srgb(0.30, 0.58, 0.25),
        RegionType::Stone => Color::srgb(0.52, 0.52, 0.54),
    }
}

/// Spawn the fixed tile pool (one cube per window cell) and the category
/// materials. Tiles are repositioned every frame by `update_terrain_tiles`.
pub fn spawn_terrain_tiles(
    mut commands: Commands,
    session: Res<WorldSession>,
    field: Res<NoiseField>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let terrain = session.terrain_params();
    let water = materials.add(StandardMaterial {
        base_color: region_color(RegionType::Water),
        perceptual_roughness: 0.3,
        ..default()
    });
    let mut by_region = HashMap::new();
    for &(region, _) in terrain.regions.bands() {
        let handle = if region == RegionType::Water {
            water.clone()
        } else {
            materials.add(StandardMaterial {
                base_color: region_color(region),
                perceptual_roughness: 0.9,
                ..default()
            })
        };
        by_region.insert(region, handle);
    }
    let region_materials = RegionMaterials { water, by_region };

    let size = terrain.cell_size;
    let mesh = meshes.add(Cuboid::new(size, size, size));

    let sampler = session.terrain(&field);
    let mut count = 0;
    for (index, cell) in sampler.placements().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(region_materials.get(cell.region).clone()),
            Transform::from_xyz(cell.world_x, cell.world_y, cell.world_z),
            TerrainTile { index },
        ));
        count += 1;
    }
    info!("Spawned {} terrain tiles", count);

    commands.insert_resource(region_materials);
}

/// Re-sample the window through the current offset and move every tile to
/// its cell's height, swapping material when the category changes.
pub fn update_terrain_tiles(
    session: Res<WorldSession>,
    field: Res<NoiseField>,
    region_materials: Res<RegionMaterials>,
    mut tiles: Query<(
        &TerrainTile,
        &mut Transform,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
) {
    if !session.is_changed() {
        return;
    }
    let cells: Vec<_> = session.terrain(&field).placements().collect();

    for (tile, mut transform, mut material) in &mut tiles {
        let Some(cell) = cells.get(tile.index) else {
            continue;
        };
        transform.translation = Vec3::new(cell.world_x, cell.world_y, cell.world_z);
        let wanted = region_materials.get(cell.region);
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}
