use voxmap_core::point::{self, Point3};
use voxmap_core::Rgba;

/// Line segments sharing one color, e.g. a wireframe box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSet {
    pub vertices: Vec<Point3>,
    pub segments: Vec<[u32; 2]>,
    pub color: Rgba,
}

impl LineSet {
    pub fn new(vertices: Vec<Point3>, segments: Vec<[u32; 2]>) -> Self {
        let n = vertices.len() as u32;
        assert!(
            segments.iter().flatten().all(|&v| v < n),
            "segment references a vertex out of range"
        );
        Self {
            vertices,
            segments,
            color: Rgba::default(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn apply_translation(&mut self, offset: Point3) {
        for v in &mut self.vertices {
            *v = point::add(*v, offset);
        }
    }

    pub fn total_length(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| {
                point::length(point::sub(
                    self.vertices[s[1] as usize],
                    self.vertices[s[0] as usize],
                ))
            })
            .sum()
    }
}
