use numpy::{PyArray2, PyArrayMethods, PyUntypedArrayMethods};
use pyo3::prelude::*;

/// Rows of an `(N, width)` float array, cast to f32.
///
/// Accepts float32 or float64. The array must be C-contiguous (row-major);
/// Fortran-order arrays are rejected to prevent silent data corruption.
pub(crate) fn read_rows(
    array: &Bound<'_, PyAny>,
    width: usize,
    what: &str,
) -> PyResult<Vec<Vec<f32>>> {
    if let Ok(arr) = array.downcast::<PyArray2<f32>>() {
        ensure_contiguous(arr.is_c_contiguous())?;
        let readonly = arr.readonly();
        let rows = check_shape(readonly.shape(), width, what)?;
        let slice = contiguous_slice(readonly.as_slice())?;
        return Ok(split_rows(slice.iter().copied(), rows, width));
    }
    if let Ok(arr) = array.downcast::<PyArray2<f64>>() {
        ensure_contiguous(arr.is_c_contiguous())?;
        let readonly = arr.readonly();
        let rows = check_shape(readonly.shape(), width, what)?;
        let slice = contiguous_slice(readonly.as_slice())?;
        return Ok(split_rows(slice.iter().map(|&v| v as f32), rows, width));
    }
    Err(pyo3::exceptions::PyTypeError::new_err(format!(
        "expected {} as NumPy array with dtype float32 or float64, shape (N, {})",
        what, width
    )))
}

fn ensure_contiguous(c_contiguous: bool) -> PyResult<()> {
    if c_contiguous {
        return Ok(());
    }
    Err(pyo3::exceptions::PyValueError::new_err(
        "array must be C-contiguous (row-major). \
         Use numpy.ascontiguousarray(arr) to convert.",
    ))
}

/// Row count of a validated `(N, width)` shape.
fn check_shape(shape: &[usize], width: usize, what: &str) -> PyResult<usize> {
    if shape.len() != 2 || shape[1] != width {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "expected {} with shape (N, {}), got {:?}",
            what, width, shape
        )));
    }
    Ok(shape[0])
}

// Splits by the array's row count so zero-width rows keep their number.
fn split_rows(mut values: impl Iterator<Item = f32>, rows: usize, width: usize) -> Vec<Vec<f32>> {
    (0..rows)
        .map(|_| values.by_ref().take(width).collect())
        .collect()
}

fn contiguous_slice<T, E>(slice: Result<&[T], E>) -> PyResult<&[T]> {
    slice.map_err(|_| {
        pyo3::exceptions::PyValueError::new_err("failed to read array as contiguous slice")
    })
}

/// `(N, W)` array from fixed-width rows.
pub(crate) fn to_array2<'py, T, const W: usize>(
    py: Python<'py>,
    rows: &[[T; W]],
) -> PyResult<Bound<'py, PyArray2<T>>>
where
    T: numpy::Element + Copy,
{
    let rows: Vec<Vec<T>> = rows.iter().map(|r| r.to_vec()).collect();
    if rows.is_empty() {
        return Ok(PyArray2::zeros_bound(py, [0, W], false));
    }
    Ok(PyArray2::from_vec2_bound(py, &rows)?)
}
