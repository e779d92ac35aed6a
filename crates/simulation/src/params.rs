//! Data-driven world parameters.
//!
//! Collects every tunable of the terrain, the bouncers and the camera into a
//! single [`WorldParams`] resource. Defaults come from `config.rs`; a JSON file
//! can override any subset of fields (every section is `#[serde(default)]`).

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::*;
use crate::params_error::ParamsError;
use crate::region::RegionTable;

// ---------------------------------------------------------------------------
// Terrain parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Window covers `[-half_extent, half_extent)` on both world axes.
    pub half_extent: f32,
    pub cell_size: f32,
    /// Noise-domain distance per world unit.
    pub sampling_density: f32,
    pub height_scale: f32,
    /// Truncate heights toward zero, giving the terraced block look.
    pub stepped_heights: bool,
    pub regions: RegionTable,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            half_extent: WINDOW_HALF_EXTENT,
            cell_size: CELL_SIZE,
            sampling_density: SAMPLING_DENSITY,
            height_scale: TERRAIN_HEIGHT_SCALE,
            stepped_heights: STEPPED_HEIGHTS,
            regions: RegionTable::default(),
        }
    }
}

impl TerrainParams {
    /// Number of cells along one side of the window.
    pub fn cells_per_side(&self) -> usize {
        ((2.0 * self.half_extent) / self.cell_size).ceil().max(0.0) as usize
    }
}

// ---------------------------------------------------------------------------
// Bouncer parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BouncerParams {
    pub count: usize,
    pub radius: f32,
    /// Vertical acceleration, negative pulls down.
    pub gravity: f32,
    pub bounce_speed: f32,
    pub ceiling: f32,
    /// Spawn range for both x and z.
    pub spawn_horizontal: (f32, f32),
    pub spawn_height: (f32, f32),
}

impl Default for BouncerParams {
    fn default() -> Self {
        Self {
            count: BOUNCER_COUNT,
            radius: BOUNCER_RADIUS,
            gravity: GRAVITY,
            bounce_speed: BOUNCE_SPEED,
            ceiling: CEILING_HEIGHT,
            spawn_horizontal: SPAWN_HORIZONTAL_RANGE,
            spawn_height: SPAWN_HEIGHT_RANGE,
        }
    }
}

// ---------------------------------------------------------------------------
// Camera parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    pub start_position: [f32; 3],
    /// Radians, 0 looks down +X, -PI/2 looks down -Z.
    pub start_yaw: f32,
    pub start_pitch: f32,
    pub move_speed: f32,
    pub vertical_speed: f32,
    pub look_sensitivity: f32,
    pub pitch_limit: f32,
    pub fov_degrees: f32,
    pub min_fov_degrees: f32,
    pub max_fov_degrees: f32,
    pub zoom_sensitivity: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Planar displacement is divided by this before reaching the world offset.
    pub offset_divisor: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            start_position: CAMERA_START,
            start_yaw: CAMERA_START_YAW,
            start_pitch: CAMERA_START_PITCH,
            move_speed: CAMERA_MOVE_SPEED,
            vertical_speed: CAMERA_VERTICAL_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
            pitch_limit: PITCH_LIMIT,
            fov_degrees: DEFAULT_FOV_DEGREES,
            min_fov_degrees: MIN_FOV_DEGREES,
            max_fov_degrees: MAX_FOV_DEGREES,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            near_plane: NEAR_PLANE,
            far_plane: FAR_PLANE,
            offset_divisor: OFFSET_DIVISOR,
        }
    }
}

// ---------------------------------------------------------------------------
// WorldParams resource
// ---------------------------------------------------------------------------

/// Top-level parameter resource.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    /// Seed for the bouncer spawn RNG.
    pub seed: u64,
    pub noise_seed: i32,
    pub terrain: TerrainParams,
    pub bouncers: BouncerParams,
    pub camera: CameraParams,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            noise_seed: NOISE_SEED,
            terrain: TerrainParams::default(),
            bouncers: BouncerParams::default(),
            camera: CameraParams::default(),
        }
    }
}

/// Relative tolerance for `density * divisor == 1`.
const OFFSET_SCALE_TOLERANCE: f32 = 1e-4;

impl WorldParams {
    /// Parse and validate parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate a JSON parameter file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check internal consistency:
    /// - sizes, speeds, the bounce speed and the pitch limit are strictly
    ///   positive and finite
    /// - spawn and zoom ranges are finite and non-empty
    /// - the window has at most `MAX_CELLS_PER_SIDE` cells per side
    /// - the offset divisor is the reciprocal of the sampling density
    pub fn validate(&self) -> Result<(), ParamsError> {
        let t = &self.terrain;
        let b = &self.bouncers;
        let c = &self.camera;

        positive("terrain.half_extent", t.half_extent)?;
        positive("terrain.cell_size", t.cell_size)?;
        positive("terrain.sampling_density", t.sampling_density)?;
        positive("bouncers.radius", b.radius)?;
        positive("bouncers.bounce_speed", b.bounce_speed)?;
        positive("camera.move_speed", c.move_speed)?;
        positive("camera.vertical_speed", c.vertical_speed)?;
        positive("camera.offset_divisor", c.offset_divisor)?;
        positive("camera.near_plane", c.near_plane)?;
        positive("camera.min_fov_degrees", c.min_fov_degrees)?;
        positive("camera.pitch_limit", c.pitch_limit)?;

        let cells = (2.0 * t.half_extent / t.cell_size).ceil();
        if cells > MAX_CELLS_PER_SIDE as f32 {
            return Err(ParamsError::WindowTooLarge {
                cells_per_side: cells,
                max: MAX_CELLS_PER_SIDE,
            });
        }

        range("bouncers.spawn_horizontal", b.spawn_horizontal)?;
        range("bouncers.spawn_height", b.spawn_height)?;
        range("camera.fov_degrees", (c.min_fov_degrees, c.max_fov_degrees))?;
        range("camera.planes", (c.near_plane, c.far_plane))?;

        if (t.sampling_density * c.offset_divisor - 1.0).abs() > OFFSET_SCALE_TOLERANCE {
            return Err(ParamsError::OffsetScaleMismatch {
                density: t.sampling_density,
                divisor: c.offset_divisor,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ParamsError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NonPositive { field, value })
    }
}

fn range(field: &'static str, (min, max): (f32, f32)) -> Result<(), ParamsError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ParamsError::InvalidRange { field, min, max })
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
