use voxmap_core::point::{self, Point3};
use voxmap_core::{FeatureCloud, MappingError, Result};

use crate::mapping::VoxelMapping;

/// Voxel index of `point`: `floor((point - origin) / pitch)` per axis.
///
/// Returns `None` for non-finite points. The index is unbounded; callers
/// decide what lies inside their grid.
pub fn point_to_index(point: &Point3, pitch: f32, origin: Point3) -> Option<[i64; 3]> {
    if !point::is_finite(point) {
        return None;
    }
    let rel = point::sub(*point, origin);
    Some([
        (rel[0] / pitch).floor() as i64,
        (rel[1] / pitch).floor() as i64,
        (rel[2] / pitch).floor() as i64,
    ])
}

pub fn points_to_indices(points: &[Point3], pitch: f32, origin: Point3) -> Vec<Option<[i64; 3]>> {
    points
        .iter()
        .map(|p| point_to_index(p, pitch, origin))
        .collect()
}

fn within(index: [i64; 3], voxel_size: usize) -> Option<[usize; 3]> {
    let n = voxel_size as i64;
    if index.iter().all(|&v| (0..n).contains(&v)) {
        Some([index[0] as usize, index[1] as usize, index[2] as usize])
    } else {
        None
    }
}

impl VoxelMapping {
    /// Grid cell of `point`, or `None` if it falls outside the grid.
    pub fn voxel_of(&self, point: &Point3) -> Option<[usize; 3]> {
        point_to_index(point, self.pitch(), self.origin())
            .and_then(|index| within(index, self.voxel_size()))
    }

    /// Rasterize `points` with their features.
    ///
    /// `values[i]` is the `nchannel`-wide feature of `points[i]`. Points
    /// outside `[origin, origin + voxel_size * pitch)` on any axis, or with
    /// non-finite coordinates, are skipped without error. When several points
    /// hit the same cell the one appearing last wins.
    ///
    /// Before touching the grid, returns [`MappingError::ShapeMismatch`] if
    /// the row counts differ and [`MappingError::ChannelMismatch`] if any row
    /// has the wrong width.
    pub fn add<V: AsRef<[f32]>>(&mut self, points: &[Point3], values: &[V]) -> Result<()> {
        if values.len() != points.len() {
            return Err(MappingError::ShapeMismatch {
                expected: points.len(),
                got: values.len(),
            });
        }
        let nchannel = self.nchannel();
        if let Some((row, width)) = values
            .iter()
            .map(|v| v.as_ref().len())
            .enumerate()
            .find(|&(_, width)| width != nchannel)
        {
            return Err(MappingError::ChannelMismatch {
                row,
                expected: nchannel,
                got: width,
            });
        }

        self.write_points(points, move |i| values[i].as_ref());
        Ok(())
    }

    /// [`add`](Self::add) for an owned cloud, whose channel count must match.
    pub fn add_cloud(&mut self, cloud: &FeatureCloud) -> Result<()> {
        if cloud.nchannel() != self.nchannel() {
            return Err(MappingError::invalid_config(format!(
                "cloud has {} channels, grid stores {}",
                cloud.nchannel(),
                self.nchannel()
            )));
        }
        self.write_points(cloud.points(), move |i| cloud.feature(i));
        Ok(())
    }

    fn write_points<'v>(&mut self, points: &[Point3], row: impl Fn(usize) -> &'v [f32]) {
        let mut kept = 0usize;
        for (i, p) in points.iter().enumerate() {
            let Some(index) = self.voxel_of(p) else {
                continue;
            };
            self.grid.write(index, row(i));
            kept += 1;
        }

        log::debug!(
            "rasterized {} of {} points ({} outside the grid)",
            kept,
            points.len(),
            points.len() - kept
        );
    }
}
