use crate::point::Point3;
use crate::Aabb;

/// Points paired with fixed-width feature vectors (e.g. RGB color).
///
/// Features are stored row-major: the feature of point `i` occupies
/// `features[i * nchannel..(i + 1) * nchannel]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCloud {
    points: Vec<Point3>,
    features: Vec<f32>,
    nchannel: usize,
}

impl FeatureCloud {
    pub fn new(nchannel: usize) -> Self {
        Self {
            points: Vec::new(),
            features: Vec::new(),
            nchannel,
        }
    }

    pub fn with_capacity(nchannel: usize, capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            features: Vec::with_capacity(capacity * nchannel),
            nchannel,
        }
    }

    pub fn from_parts(points: Vec<Point3>, features: Vec<f32>, nchannel: usize) -> Self {
        assert_eq!(
            features.len(),
            points.len() * nchannel,
            "features must have num_points * nchannel values"
        );

        Self {
            points,
            features,
            nchannel,
        }
    }

    /// Build from an interleaved `[x, y, z, x, y, z, ...]` buffer.
    pub fn from_interleaved(xyz: &[f32], features: Vec<f32>, nchannel: usize) -> Self {
        assert_eq!(xyz.len() % 3, 0, "interleaved xyz input must be a multiple of 3");
        let points = xyz.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Self::from_parts(points, features, nchannel)
    }

    pub fn push(&mut self, point: Point3, feature: &[f32]) {
        assert_eq!(
            feature.len(),
            self.nchannel,
            "feature width must equal nchannel"
        );
        self.points.push(point);
        self.features.extend_from_slice(feature);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn nchannel(&self) -> usize {
        self.nchannel
    }

    pub fn point(&self, i: usize) -> Point3 {
        self.points[i]
    }

    pub fn feature(&self, i: usize) -> &[f32] {
        let start = i * self.nchannel;
        &self.features[start..start + self.nchannel]
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn features(&self) -> &[f32] {
        &self.features
    }

    pub fn iter_points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().copied()
    }

    /// Subset in the given order; indices may repeat.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut out = Self::with_capacity(self.nchannel, indices.len());
        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            out.push(self.points[idx], self.feature(idx));
        }
        out
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureCloud;
    use proptest::prelude::*;

    #[test]
    fn new_is_empty() {
        let cloud = FeatureCloud::new(3);
        assert!(cloud.is_empty());
        assert_eq!(cloud.len(), 0);
        assert_eq!(cloud.nchannel(), 3);
    }

    #[test]
    fn push_appends_point_and_feature() {
        let mut cloud = FeatureCloud::new(3);
        cloud.push([1.0, 2.0, 3.0], &[1.0, 0.0, 0.0]);
        cloud.push([4.0, 5.0, 6.0], &[0.0, 1.0, 0.0]);
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.point(1), [4.0, 5.0, 6.0]);
        assert_eq!(cloud.feature(1), &[0.0, 1.0, 0.0]);
        assert_eq!(cloud.features().len(), 6);
    }

    #[test]
    #[should_panic(expected = "feature width must equal nchannel")]
    fn push_rejects_wrong_width() {
        let mut cloud = FeatureCloud::new(3);
        cloud.push([0.0; 3], &[1.0]);
    }

    #[test]
    fn from_interleaved_deinterleaves() {
        let cloud = FeatureCloud::from_interleaved(
            &[1.0, 10.0, 100.0, 2.0, 20.0, 200.0],
            vec![0.5, 0.25],
            1,
        );
        assert_eq!(cloud.points(), &[[1.0, 10.0, 100.0], [2.0, 20.0, 200.0]]);
        assert_eq!(cloud.feature(0), &[0.5]);
        assert_eq!(cloud.feature(1), &[0.25]);
    }

    #[test]
    #[should_panic(expected = "features must have num_points * nchannel values")]
    fn from_parts_rejects_mismatched_features() {
        FeatureCloud::from_parts(vec![[0.0; 3]; 2], vec![0.0; 5], 3);
    }

    #[test]
    fn zero_channel_cloud_has_empty_features() {
        let cloud = FeatureCloud::from_parts(vec![[0.0; 3]; 4], Vec::new(), 0);
        assert_eq!(cloud.len(), 4);
        assert!(cloud.feature(3).is_empty());
    }

    #[test]
    fn select_keeps_features_aligned() {
        let cloud = FeatureCloud::from_parts(
            vec![[0.0; 3], [1.0; 3], [2.0; 3]],
            vec![0.0, 0.1, 1.0, 1.1, 2.0, 2.1],
            2,
        );
        let selected = cloud.select(&[2, 0]);
        assert_eq!(selected.points(), &[[2.0; 3], [0.0; 3]]);
        assert_eq!(selected.features(), &[2.0, 2.1, 0.0, 0.1]);
    }

    #[test]
    fn aabb_covers_all_points() {
        let cloud = FeatureCloud::from_parts(
            vec![[0.0, 1.0, 2.0], [-1.0, 3.0, 0.5]],
            Vec::new(),
            0,
        );
        let aabb = cloud.aabb();
        assert_eq!(aabb.min, [-1.0, 1.0, 0.5]);
        assert_eq!(aabb.max, [0.0, 3.0, 2.0]);
    }

    proptest! {
        #[test]
        fn select_identity_preserves_cloud(
            pts in prop::collection::vec((-100.0f32..100.0f32, -100.0f32..100.0f32, -100.0f32..100.0f32), 0..200),
        ) {
            let points: Vec<[f32; 3]> = pts.iter().map(|p| [p.0, p.1, p.2]).collect();
            let features: Vec<f32> = pts.iter().map(|p| p.0).collect();
            let cloud = FeatureCloud::from_parts(points, features, 1);
            let all: Vec<usize> = (0..cloud.len()).collect();
            prop_assert_eq!(cloud.select(&all), cloud);
        }
    }
}
