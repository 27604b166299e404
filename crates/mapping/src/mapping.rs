use voxmap_core::point::{self, Point3};
use voxmap_core::{Aabb, Result};

use crate::config::MappingConfig;
use crate::grid::GridStore;

/// A fixed-size voxel grid anchored in world space.
///
/// Configuration is validated once in [`VoxelMapping::new`] and cannot change
/// afterwards. Writes go through [`VoxelMapping::add`], which needs `&mut self`;
/// every other operation only reads.
#[derive(Debug, Clone)]
pub struct VoxelMapping {
    config: MappingConfig,
    pub(crate) grid: GridStore,
}

impl VoxelMapping {
    pub fn new(config: MappingConfig) -> Result<Self> {
        config.validate()?;
        let grid = GridStore::new(config.voxel_size, config.nchannel);
        Ok(Self { config, grid })
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn origin(&self) -> Point3 {
        self.config.origin
    }

    pub fn pitch(&self) -> f32 {
        self.config.pitch
    }

    pub fn voxel_size(&self) -> usize {
        self.config.voxel_size
    }

    pub fn nchannel(&self) -> usize {
        self.config.nchannel
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    /// Occupancy cube, see [`GridStore::occupancy`].
    pub fn occupancy(&self) -> &[bool] {
        self.grid.occupancy()
    }

    /// Feature cube, see [`GridStore::features`].
    pub fn features(&self) -> &[f32] {
        self.grid.features()
    }

    pub fn bounding_extent(&self) -> Point3 {
        self.config.bounding_extent()
    }

    /// World-space box covered by the grid.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_extent(self.config.origin, self.bounding_extent())
    }

    /// Center of the grid volume in world space.
    pub fn center(&self) -> Point3 {
        point::add(self.config.origin, point::scale(self.bounding_extent(), 0.5))
    }
}
