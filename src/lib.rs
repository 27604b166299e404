//! Dense voxel-grid accumulation of colored point clouds.
//!
//! This crate re-exports the workspace members under one roof:
//!
//! - `voxmap-core`: points, colors, bounding boxes, [`FeatureCloud`] and errors
//! - `voxmap-primitives`: triangle meshes, line sets and the [`GeometryFactory`] seam
//! - `voxmap-mapping`: the [`VoxelMapping`] grid itself

#![forbid(unsafe_code)]

pub use voxmap_core::{Aabb, FeatureCloud, MappingError, Point3, Result, Rgba};
pub use voxmap_mapping::{BoundsStyle, MappingConfig, VoxelMapping};
pub use voxmap_primitives::{Geometry, GeometryFactory, LineSet, StandardGeometry, TriMesh};
