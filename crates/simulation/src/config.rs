/// Half the side length of the sampled terrain window, in world units.
/// The window covers `[-WINDOW_HALF_EXTENT, WINDOW_HALF_EXTENT)` on both axes.
pub const WINDOW_HALF_EXTENT: f32 = 64.0;
/// World-space spacing between terrain cells.
pub const CELL_SIZE: f32 = 2.0;
/// Noise-domain distance per world unit (0.05 noise units per 2-unit cell).
pub const SAMPLING_DENSITY: f32 = 1.0 / 40.0;
/// Divisor applied to planar camera displacement before it reaches the world
/// offset. Must be the reciprocal of `SAMPLING_DENSITY`.
pub const OFFSET_DIVISOR: f32 = 40.0;
/// Multiplier from a raw noise sample to world height.
pub const TERRAIN_HEIGHT_SCALE: f32 = 20.0;
/// Truncate heights toward zero for the terraced block look.
pub const STEPPED_HEIGHTS: bool = true;
/// Upper bound on terrain cells along one side of the window.
pub const MAX_CELLS_PER_SIDE: usize = 1024;
pub const NOISE_SEED: i32 = 1337;
/// Seed for the bouncer spawn RNG.
pub const DEFAULT_SEED: u64 = 42;

pub const BOUNCER_COUNT: usize = 10;
pub const BOUNCER_RADIUS: f32 = 1.5;
pub const GRAVITY: f32 = -9.81;
/// Upward speed a bouncer gets every time it lands, regardless of impact speed.
pub const BOUNCE_SPEED: f32 = 20.0;
pub const CEILING_HEIGHT: f32 = 60.0;
pub const SPAWN_HORIZONTAL_RANGE: (f32, f32) = (-64.0, 64.0);
pub const SPAWN_HEIGHT_RANGE: (f32, f32) = (20.0, 40.0);

pub const CAMERA_START: [f32; 3] = [0.0, 18.0, 20.0];
/// Looking down -Z toward the origin.
pub const CAMERA_START_YAW: f32 = -std::f32::consts::FRAC_PI_2;
pub const CAMERA_START_PITCH: f32 = -0.35;
pub const CAMERA_MOVE_SPEED: f32 = 30.0;
pub const CAMERA_VERTICAL_SPEED: f32 = 15.0;
/// Radians of yaw/pitch per pixel of drag.
pub const LOOK_SENSITIVITY: f32 = 0.003;
pub const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;
pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
pub const MIN_FOV_DEGREES: f32 = 1.0;
pub const MAX_FOV_DEGREES: f32 = 90.0;
/// Degrees of field of view per scroll line.
pub const ZOOM_SENSITIVITY: f32 = 2.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 200.0;
