#![forbid(unsafe_code)]

pub mod factory;
pub mod lines;
pub mod mesh;
pub mod standard;

pub use factory::GeometryFactory;
pub use lines::LineSet;
pub use mesh::{TriMesh, MAX_VERTICES};
pub use standard::StandardGeometry;

/// Any primitive a factory can hand back to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Mesh(TriMesh),
    Lines(LineSet),
}

impl Geometry {
    pub fn as_mesh(&self) -> Option<&TriMesh> {
        match self {
            Geometry::Mesh(mesh) => Some(mesh),
            Geometry::Lines(_) => None,
        }
    }

    pub fn as_lines(&self) -> Option<&LineSet> {
        match self {
            Geometry::Lines(lines) => Some(lines),
            Geometry::Mesh(_) => None,
        }
    }
}

impl From<TriMesh> for Geometry {
    fn from(mesh: TriMesh) -> Self {
        Geometry::Mesh(mesh)
    }
}

impl From<LineSet> for Geometry {
    fn from(lines: LineSet) -> Self {
        Geometry::Lines(lines)
    }
}
