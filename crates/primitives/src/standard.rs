use hashbrown::HashMap;
use voxmap_core::point::{self, Point3};

use crate::{GeometryFactory, LineSet, TriMesh};

/// Unit cube corners, index bits are `x << 2 | y << 1 | z`.
const BOX_CORNERS: [Point3; 8] = [
    [-0.5, -0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, 0.5, 0.5],
    [0.5, -0.5, -0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, -0.5],
    [0.5, 0.5, 0.5],
];

/// Outward-wound triangles over `BOX_CORNERS`, two per side.
const BOX_FACES: [[u32; 3]; 12] = [
    [1, 3, 0],
    [4, 1, 0],
    [0, 3, 2],
    [2, 4, 0],
    [1, 7, 3],
    [5, 1, 4],
    [5, 7, 1],
    [3, 7, 2],
    [6, 4, 2],
    [2, 7, 6],
    [6, 5, 4],
    [7, 5, 6],
];

/// Corner pairs differing in exactly one bit.
const BOX_EDGES: [[u32; 2]; 12] = [
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Self-contained geometry factory producing plain triangle meshes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGeometry;

impl StandardGeometry {
    pub fn new() -> Self {
        Self
    }

    fn box_vertices(extents: Point3, translation: Point3) -> Vec<Point3> {
        BOX_CORNERS
            .iter()
            .map(|c| {
                point::add(
                    [c[0] * extents[0], c[1] * extents[1], c[2] * extents[2]],
                    translation,
                )
            })
            .collect()
    }
}

impl GeometryFactory for StandardGeometry {
    fn solid_box(&self, extents: Point3, translation: Point3) -> TriMesh {
        TriMesh::new(
            Self::box_vertices(extents, translation),
            BOX_FACES.to_vec(),
        )
    }

    fn wired_box(&self, extents: Point3, translation: Point3) -> LineSet {
        LineSet::new(
            Self::box_vertices(extents, translation),
            BOX_EDGES.to_vec(),
        )
    }

    fn icosphere(&self, radius: f32, subdivisions: u32) -> TriMesh {
        let t = (1.0 + 5.0f32.sqrt()) / 2.0;
        let mut vertices: Vec<Point3> = [
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [t, 0.0, -1.0],
            [t, 0.0, 1.0],
            [-t, 0.0, -1.0],
            [-t, 0.0, 1.0],
        ]
        .into_iter()
        .map(point::normalize)
        .collect();
        let mut faces = ICOSAHEDRON_FACES.to_vec();

        for _ in 0..subdivisions {
            let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
            let mut next = Vec::with_capacity(faces.len() * 4);
            for [a, b, c] in faces {
                let ab = midpoint(&mut vertices, &mut midpoints, a, b);
                let bc = midpoint(&mut vertices, &mut midpoints, b, c);
                let ca = midpoint(&mut vertices, &mut midpoints, c, a);
                next.push([a, ab, ca]);
                next.push([b, bc, ab]);
                next.push([c, ca, bc]);
                next.push([ab, bc, ca]);
            }
            faces = next;
        }

        for v in &mut vertices {
            *v = point::scale(*v, radius);
        }
        TriMesh::new(vertices, faces)
    }

    fn voxel_boxes(&self, cells: &[[usize; 3]], pitch: f32, origin: Point3) -> TriMesh {
        let mut vertices = Vec::with_capacity(cells.len() * BOX_CORNERS.len());
        let mut faces = Vec::with_capacity(cells.len() * BOX_FACES.len());
        for cell in cells {
            let base = crate::mesh::index_base(vertices.len(), BOX_CORNERS.len());
            let center = crate::factory::cell_center(*cell, pitch, origin);
            vertices.extend(Self::box_vertices([pitch; 3], center));
            faces.extend(
                BOX_FACES
                    .iter()
                    .map(|f| [f[0] + base, f[1] + base, f[2] + base]),
            );
        }
        TriMesh::new(vertices, faces)
    }
}

/// Index of the unit-sphere midpoint of edge `(a, b)`, created on first use.
fn midpoint(
    vertices: &mut Vec<Point3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    *cache.entry(key).or_insert_with(|| {
        let pa = vertices[a as usize];
        let pb = vertices[b as usize];
        vertices.push(point::normalize(point::scale(point::add(pa, pb), 0.5)));
        (vertices.len() - 1) as u32
    })
}
