use crate::noise_field::NoiseField;
use crate::params::TerrainParams;
use crate::region::RegionType;
use crate::world_offset::SamplingFrame;

/// One terrain cell ready for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainPlacement {
    pub world_x: f32,
    pub world_y: f32,
    pub world_z: f32,
    pub region: RegionType,
    /// Raw noise value the height and region were derived from.
    pub sample: f32,
}

/// Samples the fixed terrain window through one frame's [`SamplingFrame`].
///
/// Borrowing the field, the parameters and a copied frame keeps the sampler a
/// pure function of its inputs; build a fresh one each frame.
#[derive(Clone, Copy)]
pub struct TerrainSampler<'a> {
    field: &'a NoiseField,
    params: &'a TerrainParams,
    frame: SamplingFrame,
}

impl<'a> TerrainSampler<'a> {
    pub fn new(field: &'a NoiseField, params: &'a TerrainParams, frame: SamplingFrame) -> Self {
        Self {
            field,
            params,
            frame,
        }
    }

    pub fn frame(&self) -> SamplingFrame {
        self.frame
    }

    /// Raw field value under a world position.
    pub fn sample_at(&self, world_x: f32, world_z: f32) -> f32 {
        let p = self.frame.to_noise(world_x, world_z);
        self.field.sample(p.x, p.y)
    }

    /// Terrain surface height under a world position. Bouncer floor queries
    /// and placements share this function.
    pub fn height_at(&self, world_x: f32, world_z: f32) -> f32 {
        self.height_of(self.sample_at(world_x, world_z))
    }

    fn height_of(&self, sample: f32) -> f32 {
        let h = self.params.height_scale * sample;
        if self.params.stepped_heights {
            h.trunc()
        } else {
            h
        }
    }

    pub fn placement_at(&self, world_x: f32, world_z: f32) -> TerrainPlacement {
        let sample = self.sample_at(world_x, world_z);
        TerrainPlacement {
            world_x,
            world_y: self.height_of(sample),
            world_z,
            region: self.params.regions.classify(sample),
            sample,
        }
    }

    /// Lazy, row-major walk over the window: outer loop over world x, inner
    /// over world z. Call again to restart.
    pub fn placements(&self) -> TerrainCells<'a> {
        let side = self.params.cells_per_side();
        TerrainCells {
            sampler: *self,
            side,
            total: side.saturating_mul(side),
            next: 0,
        }
    }

    /// World coordinate of cell index `i` along either axis.
    fn cell_coord(&self, i: usize) -> f32 {
        -self.params.half_extent + i as f32 * self.params.cell_size
    }
}

/// Iterator returned by [`TerrainSampler::placements`].
pub struct TerrainCells<'a> {
    sampler: TerrainSampler<'a>,
    side: usize,
    total: usize,
    next: usize,
}

impl Iterator for TerrainCells<'_> {
    type Item = TerrainPlacement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let ix = self.next / self.side;
        let iz = self.next % self.side;
        self.next += 1;
        Some(
            self.sampler
                .placement_at(self.sampler.cell_coord(ix), self.sampler.cell_coord(iz)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next.min(self.total);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TerrainCells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_offset::WorldOffset;

    fn frame(x: f32, y: f32, params: &TerrainParams) -> SamplingFrame {
        SamplingFrame::new(WorldOffset::new(x, y), params.sampling_density)
    }

    #[test]
    fn test_window_size_and_bounds() {
        let field = NoiseField::default();
        let params = TerrainParams::default();
        let sampler = TerrainSampler::new(&field, &params, frame(0.0, 0.0, &params));
        let cells: Vec<_> = sampler.placements().collect();
        assert_eq!(cells.len(), 64 * 64);
        assert_eq!(sampler.placements().len(), 64 * 64);
        assert_eq!(cells[0].world_x, -64.0);
        assert_eq!(cells[0].world_z, -64.0);
        let last = cells[cells.len() - 1];
        assert_eq!(last.world_x, 62.0);
        assert_eq!(last.world_z, 62.0);
    }

    #[test]
    fn test_row_major_order() {
        let field = NoiseField::default();
        let params = TerrainParams::default();
        let sampler = TerrainSampler::new(&field, &params, frame(0.0, 0.0, &params));
        let cells: Vec<_> = sampler.placements().take(66).collect();
        // Inner loop walks z first.
        assert_eq!((cells[0].world_x, cells[0].world_z), (-64.0, -64.0));
        assert_eq!((cells[1].world_x, cells[1].world_z), (-64.0, -62.0));
        assert_eq!((cells[63].world_x, cells[63].world_z), (-64.0, 62.0));
        assert_eq!((cells[64].world_x, cells[64].world_z), (-62.0, -64.0));
    }

    #[test]
    fn test_restartable() {
        let field = NoiseField::default();
        let params = TerrainParams::default();
        let sampler = TerrainSampler::new(&field, &params, frame(3.0, -2.0, &params));
        let a: Vec<_> = sampler.placements().collect();
        let b: Vec<_> = sampler.placements().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_height_and_region_follow_sample() {
        let field = NoiseField::default();
        let params = TerrainParams {
            stepped_heights: false,
            ..TerrainParams::default()
        };
        let sampler = TerrainSampler::new(&field, &params, frame(0.7, 0.2, &params));
        for cell in sampler.placements() {
            assert_eq!(cell.world_y, params.height_scale * cell.sample);
            assert_eq!(cell.region, params.regions.classify(cell.sample));
            assert_eq!(cell.world_y, sampler.height_at(cell.world_x, cell.world_z));
        }
    }

    #[test]
    fn test_sampling_uses_density_and_offset() {
        let field = NoiseField::default();
        let params = TerrainParams::default();
        let sampler = TerrainSampler::new(&field, &params, frame(5.0, 7.0, &params));
        let cell = sampler.placement_at(-64.0, 10.0);
        let expected = field.sample(
            -64.0 * params.sampling_density + 5.0,
            10.0 * params.sampling_density + 7.0,
        );
        assert_eq!(cell.sample, expected);
    }

    #[test]
    fn test_stepped_heights_truncate_toward_zero() {
        let field = NoiseField::default();
        let params = TerrainParams {
            stepped_heights: true,
            ..TerrainParams::default()
        };
        let sampler = TerrainSampler::new(&field, &params, frame(0.3, 0.9, &params));
        for cell in sampler.placements() {
            assert_eq!(cell.world_y, cell.world_y.trunc());
            assert!(cell.world_y.abs() <= (params.height_scale * cell.sample).abs());
        }
    }

    #[test]
    fn test_default_heights_are_stepped_and_shared_with_floor() {
        let field = NoiseField::default();
        let params = TerrainParams::default();
        let sampler = TerrainSampler::new(&field, &params, frame(1.1, -0.4, &params));
        for cell in sampler.placements() {
            assert_eq!(cell.world_y, (params.height_scale * cell.sample).trunc());
            assert_eq!(cell.world_y, sampler.height_at(cell.world_x, cell.world_z));
        }
    }

    #[test]
    fn test_huge_side_does_not_overflow() {
        let field = NoiseField::default();
        let params = TerrainParams {
            half_extent: 1e30,
            cell_size: 1.0,
            ..TerrainParams::default()
        };
        let sampler = TerrainSampler::new(&field, &params, frame(0.0, 0.0, &params));
        let mut cells = sampler.placements();
        assert_eq!(cells.len(), usize::MAX);
        assert!(cells.next().is_some());
    }

    #[test]
    fn test_window_contains_several_regions() {
        let field = NoiseField::default();
        let params = TerrainParams::default();
        let sampler = TerrainSampler::new(&field, &params, frame(0.0, 0.0, &params));
        let mut seen = std::collections::HashSet::new();
        for cell in sampler.placements() {
            seen.insert(cell.region);
        }
        assert!(seen.len() >= 2, "only saw {seen:?}");
    }
}
