use std::iter;

use voxmap_core::{MappingError, Result, Rgba};
use voxmap_primitives::{Geometry, GeometryFactory, TriMesh, MAX_VERTICES};

use crate::mapping::VoxelMapping;

pub const ORIGIN_MARKER_RADIUS: f32 = 0.01;
pub const ORIGIN_MARKER_SUBDIVISIONS: u32 = 3;

/// Corners of one voxel box.
const BOX_CORNERS: usize = 8;

/// Refuses cell counts whose boxes could not be indexed by a [`TriMesh`].
fn check_box_budget(cells: usize) -> Result<()> {
    if cells > MAX_VERTICES / BOX_CORNERS {
        return Err(MappingError::Geometry {
            message: format!(
                "{} occupied voxels exceed the {} boxes a u32-indexed mesh can hold",
                cells,
                MAX_VERTICES / BOX_CORNERS
            ),
        });
    }
    Ok(())
}

/// What [`VoxelMapping::as_bbox`] draws around the grid volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsStyle {
    /// Wireframe of the grid volume.
    pub draw_edges: bool,
    /// Solid box over the grid volume, filled with this color.
    pub face_color: Option<Rgba>,
    /// Color of the sphere marking `origin`. The marker is always drawn.
    pub origin_color: Rgba,
}

impl Default for BoundsStyle {
    fn default() -> Self {
        Self {
            draw_edges: true,
            face_color: None,
            origin_color: Rgba::RED,
        }
    }
}

impl VoxelMapping {
    /// One box per occupied voxel, every face colored by the voxel's feature.
    ///
    /// Boxes are emitted in lexicographic `(i, j, k)` order. An empty grid
    /// yields an empty mesh.
    pub fn as_boxes<F>(&self, factory: &F) -> Result<TriMesh>
    where
        F: GeometryFactory + ?Sized,
    {
        let cells = self.grid.occupied_indices();
        if cells.is_empty() {
            return Ok(TriMesh::empty());
        }
        check_box_budget(cells.len())?;

        let mut mesh = factory.voxel_boxes(&cells, self.pitch(), self.origin());
        let faces = mesh.face_count();
        if faces % cells.len() != 0 {
            return Err(MappingError::Geometry {
                message: format!(
                    "{} faces cannot be split evenly across {} voxels",
                    faces,
                    cells.len()
                ),
            });
        }

        let per_cell = faces / cells.len();
        let colors = cells
            .iter()
            .flat_map(|&cell| {
                iter::repeat(Rgba::from_feature(self.grid.feature(cell))).take(per_cell)
            })
            .collect();
        mesh.set_face_colors(colors);
        Ok(mesh)
    }

    /// Helper geometry for the grid volume, independent of occupancy.
    ///
    /// In order: the wireframe (if `draw_edges`), the solid box (if
    /// `face_color` is set), then the origin marker.
    pub fn as_bbox<F>(&self, factory: &F, style: BoundsStyle) -> Vec<Geometry>
    where
        F: GeometryFactory + ?Sized,
    {
        let extent = self.bounding_extent();
        let center = self.center();
        let mut geometries: Vec<Geometry> = Vec::with_capacity(3);

        if style.draw_edges {
            geometries.push(factory.wired_box(extent, center).into());
        }

        if let Some(color) = style.face_color {
            let mut solid = factory.solid_box(extent, center);
            solid.set_uniform_color(color);
            geometries.push(solid.into());
        }

        let mut marker = factory.icosphere(ORIGIN_MARKER_RADIUS, ORIGIN_MARKER_SUBDIVISIONS);
        marker.apply_translation(self.origin());
        marker.set_uniform_color(style.origin_color);
        geometries.push(marker.into());

        geometries
    }
}
