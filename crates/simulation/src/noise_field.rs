use bevy::prelude::*;
use fastnoise_lite::{FastNoiseLite, NoiseType};

/// The single continuous scalar field behind terrain height and classification.
///
/// Classic gradient (Perlin) noise at frequency 1.0: callers control spatial
/// frequency by scaling their coordinates (see `SamplingFrame`). Output is
/// roughly within [-1, 1]; that bound is not enforced. Sampling is pure and
/// deterministic for a given seed.
#[derive(Resource)]
pub struct NoiseField {
    noise: FastNoiseLite,
    seed: i32,
}

impl NoiseField {
    pub fn new(seed: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(1.0));
        Self { noise, seed }
    }

    pub fn sample(&self, x: f32, y: f32) -> f32 {
        self.noise.get_noise_2d(x, y)
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(crate::config::NOISE_SEED)
    }
}
