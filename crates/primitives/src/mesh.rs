use voxmap_core::point::{self, Point3};
use voxmap_core::{Aabb, Rgba};

/// Largest vertex count `u32` face indices can address.
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// `len` as the index of the next vertex of a mesh about to grow by `extra`.
///
/// Panics if the grown mesh could not be addressed with `u32` indices.
pub fn index_base(len: usize, extra: usize) -> u32 {
    match len.checked_add(extra) {
        Some(total) if total <= MAX_VERTICES => len as u32,
        _ => panic!(
            "mesh of {} + {} vertices exceeds u32 face indices",
            len, extra
        ),
    }
}

/// Indexed triangle mesh with one color per face.
///
/// `face_colors` always has exactly one entry per face; constructors fill it
/// with [`Rgba::GRAY`] until a caller recolors the mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriMesh {
    pub vertices: Vec<Point3>,
    pub faces: Vec<[u32; 3]>,
    pub face_colors: Vec<Rgba>,
}

impl TriMesh {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(vertices: Vec<Point3>, faces: Vec<[u32; 3]>) -> Self {
        let n = index_base(vertices.len(), 0);
        assert!(
            faces.iter().flatten().all(|&v| v < n),
            "face references a vertex out of range"
        );
        let face_colors = vec![Rgba::GRAY; faces.len()];
        Self {
            vertices,
            faces,
            face_colors,
        }
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn apply_translation(&mut self, offset: Point3) {
        for v in &mut self.vertices {
            *v = point::add(*v, offset);
        }
    }

    pub fn set_uniform_color(&mut self, color: Rgba) {
        self.face_colors.clear();
        self.face_colors.resize(self.faces.len(), color);
    }

    /// Replace all face colors.
    ///
    /// # Panics
    ///
    /// Panics if `colors` does not hold one entry per face.
    pub fn set_face_colors(&mut self, colors: Vec<Rgba>) {
        assert_eq!(
            colors.len(),
            self.faces.len(),
            "face color count must equal face count"
        );
        self.face_colors = colors;
    }

    /// Append `other`, re-basing its face indices.
    pub fn append(&mut self, other: &TriMesh) {
        let base = index_base(self.vertices.len(), other.vertices.len());
        self.vertices.extend_from_slice(&other.vertices);
        self.faces
            .extend(other.faces.iter().map(|f| [f[0] + base, f[1] + base, f[2] + base]));
        self.face_colors.extend_from_slice(&other.face_colors);
    }

    pub fn concatenate<'a>(meshes: impl IntoIterator<Item = &'a TriMesh>) -> TriMesh {
        let mut out = TriMesh::empty();
        for mesh in meshes {
            out.append(mesh);
        }
        out
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
    }

    /// Signed volume via the divergence theorem; positive for outward winding.
    pub fn signed_volume(&self) -> f32 {
        self.faces
            .iter()
            .map(|f| {
                let a = self.vertices[f[0] as usize];
                let b = self.vertices[f[1] as usize];
                let c = self.vertices[f[2] as usize];
                let bc = [
                    b[1] * c[2] - b[2] * c[1],
                    b[2] * c[0] - b[0] * c[2],
                    b[0] * c[1] - b[1] * c[0],
                ];
                (a[0] * bc[0] + a[1] * bc[1] + a[2] * bc[2]) / 6.0
            })
            .sum()
    }
}
