//! Dense voxel-grid accumulator.
//!
//! [`VoxelMapping`] discretizes points carrying feature vectors (usually RGB)
//! into a fixed `voxel_size³` grid anchored at `origin` with edge `pitch`.
//! Each cell remembers whether any point landed in it and the feature of the
//! last point that did. Occupied cells can then be turned into a colored box
//! mesh through any [`GeometryFactory`](voxmap_primitives::GeometryFactory).
//!
//! ```ignore
//! use voxmap_mapping::{MappingConfig, VoxelMapping};
//! use voxmap_primitives::StandardGeometry;
//!
//! let mut mapping = VoxelMapping::new(MappingConfig::new([0.0; 3], 0.1, 32, 3))?;
//! mapping.add(&[[0.05, 0.05, 0.05]], &[[1.0, 0.0, 0.0]])?;
//! let boxes = mapping.as_boxes(&StandardGeometry)?;
//! assert_eq!(boxes.face_count(), 12);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod mapping;
pub mod rasterize;
pub mod synth;

pub use config::MappingConfig;
pub use grid::GridStore;
pub use mapping::VoxelMapping;
pub use rasterize::{point_to_index, points_to_indices};
pub use synth::{BoundsStyle, ORIGIN_MARKER_RADIUS, ORIGIN_MARKER_SUBDIVISIONS};

pub use voxmap_core::{MappingError, Result};
