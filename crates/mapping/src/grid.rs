use std::cell::OnceCell;

/// Occupancy and feature storage for a cubic voxel grid.
///
/// Both arrays are row-major over `(i, j, k)` with `k` varying fastest and
/// are allocated on first access, occupancy all-false and features all-zero.
/// Shapes are fixed at construction.
#[derive(Debug, Clone)]
pub struct GridStore {
    voxel_size: usize,
    nchannel: usize,
    occupancy: OnceCell<Vec<bool>>,
    features: OnceCell<Vec<f32>>,
}

impl GridStore {
    pub(crate) fn new(voxel_size: usize, nchannel: usize) -> Self {
        Self {
            voxel_size,
            nchannel,
            occupancy: OnceCell::new(),
            features: OnceCell::new(),
        }
    }

    pub fn voxel_size(&self) -> usize {
        self.voxel_size
    }

    pub fn nchannel(&self) -> usize {
        self.nchannel
    }

    pub fn cell_count(&self) -> usize {
        self.voxel_size * self.voxel_size * self.voxel_size
    }

    /// Whether both arrays have been materialised.
    pub fn is_allocated(&self) -> bool {
        self.occupancy.get().is_some() && self.features.get().is_some()
    }

    /// Row-major offset of `index` into the occupancy array.
    ///
    /// # Panics
    ///
    /// Panics if any component is `>= voxel_size`.
    pub fn linear_index(&self, index: [usize; 3]) -> usize {
        let n = self.voxel_size;
        assert!(
            index.iter().all(|&v| v < n),
            "voxel index {:?} out of bounds for size {}",
            index,
            n
        );
        (index[0] * n + index[1]) * n + index[2]
    }

    fn unravel(&self, linear: usize) -> [usize; 3] {
        let n = self.voxel_size;
        [linear / (n * n), (linear / n) % n, linear % n]
    }

    fn alloc_occupancy(&self) -> Vec<bool> {
        log::trace!("allocating {}^3 occupancy grid", self.voxel_size);
        vec![false; self.cell_count()]
    }

    fn alloc_features(&self) -> Vec<f32> {
        log::trace!(
            "allocating {}^3 x {} feature grid",
            self.voxel_size,
            self.nchannel
        );
        vec![0.0; self.cell_count() * self.nchannel]
    }

    pub fn occupancy(&self) -> &[bool] {
        self.occupancy.get_or_init(|| self.alloc_occupancy())
    }

    pub fn occupancy_mut(&mut self) -> &mut [bool] {
        self.occupancy();
        match self.occupancy.get_mut() {
            Some(cells) => cells,
            None => &mut [],
        }
    }

    /// Flat `voxel_size³ × nchannel` feature array.
    pub fn features(&self) -> &[f32] {
        self.features.get_or_init(|| self.alloc_features())
    }

    pub fn features_mut(&mut self) -> &mut [f32] {
        self.features();
        match self.features.get_mut() {
            Some(values) => values,
            None => &mut [],
        }
    }

    pub fn is_occupied(&self, index: [usize; 3]) -> bool {
        let at = self.linear_index(index);
        self.occupancy()[at]
    }

    /// Stored feature of cell `index`; all zeros if never written.
    pub fn feature(&self, index: [usize; 3]) -> &[f32] {
        let start = self.linear_index(index) * self.nchannel;
        &self.features()[start..start + self.nchannel]
    }

    /// Mark `index` occupied and overwrite its feature.
    pub(crate) fn write(&mut self, index: [usize; 3], value: &[f32]) {
        debug_assert_eq!(value.len(), self.nchannel);
        let at = self.linear_index(index);
        self.occupancy_mut()[at] = true;
        let nchannel = self.nchannel;
        self.features_mut()[at * nchannel..(at + 1) * nchannel].copy_from_slice(value);
    }

    /// Occupied cells in lexicographic `(i, j, k)` order.
    pub fn occupied_indices(&self) -> Vec<[usize; 3]> {
        self.occupancy()
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(|(linear, _)| self.unravel(linear))
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupancy().iter().filter(|&&occupied| occupied).count()
    }
}
