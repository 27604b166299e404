use voxmap_core::point::{self, Point3};

use crate::{LineSet, TriMesh};

/// Source of the primitive shapes voxel rendering is assembled from.
///
/// The mapping crate only talks to this trait, so a renderer can plug in its
/// own mesh library and tests can supply deterministic doubles.
pub trait GeometryFactory {
    /// Closed box with the given edge lengths, centered at `translation`.
    fn solid_box(&self, extents: Point3, translation: Point3) -> TriMesh;

    /// The twelve edges of a box with the given edge lengths, centered at
    /// `translation`.
    fn wired_box(&self, extents: Point3, translation: Point3) -> LineSet;

    /// Sphere of `radius` centered at the world origin.
    fn icosphere(&self, radius: f32, subdivisions: u32) -> TriMesh;

    /// One cube of edge `pitch` per cell, concatenated in the order given.
    ///
    /// Cell `(i, j, k)` is centered at `origin + (index + 0.5) * pitch`, so
    /// `origin` is the outer corner of cell `(0, 0, 0)`. Every cell must
    /// contribute the same number of faces.
    fn voxel_boxes(&self, cells: &[[usize; 3]], pitch: f32, origin: Point3) -> TriMesh {
        let mut out = TriMesh::empty();
        for cell in cells {
            let center = cell_center(*cell, pitch, origin);
            out.append(&self.solid_box([pitch; 3], center));
        }
        out
    }
}

/// World-space center of voxel `cell`.
pub fn cell_center(cell: [usize; 3], pitch: f32, origin: Point3) -> Point3 {
    point::add(
        origin,
        [
            (cell[0] as f32 + 0.5) * pitch,
            (cell[1] as f32 + 0.5) * pitch,
            (cell[2] as f32 + 0.5) * pitch,
        ],
    )
}
