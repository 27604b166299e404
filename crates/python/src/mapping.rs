use numpy::PyArray2;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use voxmap_core::{MappingError, Rgba};
use voxmap_mapping::{BoundsStyle, MappingConfig};
use voxmap_primitives::{Geometry, StandardGeometry, TriMesh};

use crate::array::{read_rows, to_array2};

fn value_error(err: MappingError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

#[pyclass(name = "VoxelMapping")]
#[derive(Debug, Clone)]
pub struct PyVoxelMapping {
    pub(crate) inner: voxmap_mapping::VoxelMapping,
}

#[pymethods]
impl PyVoxelMapping {
    #[new]
    #[pyo3(signature = (origin, pitch, voxel_size, nchannel = 3))]
    pub fn new(origin: [f32; 3], pitch: f32, voxel_size: usize, nchannel: usize) -> PyResult<Self> {
        let config = MappingConfig::new(origin, pitch, voxel_size, nchannel);
        let inner = voxmap_mapping::VoxelMapping::new(config).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Load the grid configuration from a YAML file.
    #[staticmethod]
    pub fn from_yaml_file(path: &str) -> PyResult<Self> {
        let config = MappingConfig::load(std::path::Path::new(path))
            .map_err(|e| pyo3::exceptions::PyIOError::new_err(e.to_string()))?;
        let inner = voxmap_mapping::VoxelMapping::new(config).map_err(value_error)?;
        Ok(Self { inner })
    }

    #[getter]
    pub fn origin(&self) -> [f32; 3] {
        self.inner.origin()
    }

    #[getter]
    pub fn pitch(&self) -> f32 {
        self.inner.pitch()
    }

    #[getter]
    pub fn voxel_size(&self) -> usize {
        self.inner.voxel_size()
    }

    #[getter]
    pub fn nchannel(&self) -> usize {
        self.inner.nchannel()
    }

    #[getter]
    pub fn voxel_bbox_extents(&self) -> [f32; 3] {
        self.inner.bounding_extent()
    }

    /// Rasterize an (N, 3) point array with its (N, nchannel) feature array.
    ///
    /// Points outside the grid are skipped silently; later points overwrite
    /// earlier ones in the same voxel.
    pub fn add(&mut self, points: &Bound<'_, PyAny>, values: &Bound<'_, PyAny>) -> PyResult<()> {
        let points: Vec<[f32; 3]> = read_rows(points, 3, "points")?
            .into_iter()
            .map(|r| [r[0], r[1], r[2]])
            .collect();
        let features = read_rows(values, self.inner.nchannel(), "values")?;
        self.inner.add(&points, &features).map_err(value_error)
    }

    /// Occupied voxel indices as an (M, 3) int64 array, lexicographic order.
    pub fn occupied_indices<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i64>>> {
        let cells: Vec<[i64; 3]> = self
            .inner
            .grid()
            .occupied_indices()
            .into_iter()
            .map(|c| [c[0] as i64, c[1] as i64, c[2] as i64])
            .collect();
        to_array2(py, &cells)
    }

    /// Stored feature rows for the occupied voxels, aligned with
    /// `occupied_indices()`.
    pub fn occupied_values(&self) -> Vec<Vec<f32>> {
        let grid = self.inner.grid();
        grid.occupied_indices()
            .into_iter()
            .map(|cell| grid.feature(cell).to_vec())
            .collect()
    }

    /// Colored box mesh as a dict of `vertices`, `faces` and `face_colors`.
    pub fn as_boxes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let mesh = self.inner.as_boxes(&StandardGeometry).map_err(value_error)?;
        mesh_dict(py, &mesh)
    }

    /// Bounding-box helpers as a list of dicts, each tagged with `kind`.
    ///
    /// Colors are RGB or RGBA sequences; a missing alpha is 1.0.
    #[pyo3(signature = (edge = true, face_color = None, origin_color = vec![1.0, 0.0, 0.0]))]
    pub fn as_bbox<'py>(
        &self,
        py: Python<'py>,
        edge: bool,
        face_color: Option<Vec<f32>>,
        origin_color: Vec<f32>,
    ) -> PyResult<Bound<'py, PyList>> {
        let style = BoundsStyle {
            draw_edges: edge,
            face_color: face_color
                .map(|c| color_arg(&c, "face_color"))
                .transpose()?,
            origin_color: color_arg(&origin_color, "origin_color")?,
        };
        let list = PyList::empty_bound(py);
        for geometry in self.inner.as_bbox(&StandardGeometry, style) {
            let dict = match &geometry {
                Geometry::Mesh(mesh) => mesh_dict(py, mesh)?,
                Geometry::Lines(lines) => {
                    let dict = PyDict::new_bound(py);
                    dict.set_item("kind", "lines")?;
                    dict.set_item("vertices", to_array2(py, &lines.vertices)?)?;
                    dict.set_item("segments", to_array2(py, &lines.segments)?)?;
                    dict.set_item("color", lines.color.to_array())?;
                    dict
                }
            };
            list.append(dict)?;
        }
        Ok(list)
    }

    pub fn __repr__(&self) -> String {
        format!(
            "VoxelMapping(origin={:?}, pitch={}, voxel_size={}, nchannel={}, occupied={})",
            self.inner.origin(),
            self.inner.pitch(),
            self.inner.voxel_size(),
            self.inner.nchannel(),
            self.inner.grid().occupied_count()
        )
    }
}

fn color_arg(components: &[f32], what: &str) -> PyResult<Rgba> {
    Rgba::from_components(components).ok_or_else(|| {
        pyo3::exceptions::PyValueError::new_err(format!(
            "{} must have 3 or 4 components, got {}",
            what,
            components.len()
        ))
    })
}

fn mesh_dict<'py>(py: Python<'py>, mesh: &TriMesh) -> PyResult<Bound<'py, PyDict>> {
    let colors: Vec<[f32; 4]> = mesh.face_colors.iter().map(|c| c.to_array()).collect();
    let dict = PyDict::new_bound(py);
    dict.set_item("kind", "mesh")?;
    dict.set_item("vertices", to_array2(py, &mesh.vertices)?)?;
    dict.set_item("faces", to_array2(py, &mesh.faces)?)?;
    dict.set_item("face_colors", to_array2(py, &colors)?)?;
    Ok(dict)
}
