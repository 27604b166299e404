#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod array;
mod mapping;

#[pymodule]
fn voxmap(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<mapping::PyVoxelMapping>()?;
    m.add("ORIGIN_MARKER_RADIUS", voxmap_mapping::ORIGIN_MARKER_RADIUS)?;
    Ok(())
}
