//! Adversarial edge-case integration tests.
//!
//! These tests probe degenerate, boundary, and pathological inputs across
//! the crate stack to verify no panics and consistent error handling.

use voxmap::{
    BoundsStyle, GeometryFactory, LineSet, MappingConfig, MappingError, StandardGeometry, TriMesh,
    VoxelMapping,
};

fn grid(voxel_size: usize, pitch: f32) -> VoxelMapping {
    VoxelMapping::new(MappingConfig::new([0.0; 3], pitch, voxel_size, 3)).unwrap()
}

// ────────────────── Configuration ──────────────────

#[test]
fn zero_voxel_size_fails_at_construction() {
    let err = VoxelMapping::new(MappingConfig::new([0.0; 3], 1.0, 0, 3)).unwrap_err();
    assert!(matches!(err, MappingError::InvalidConfig { .. }));
}

#[test]
fn degenerate_pitch_fails_at_construction() {
    for pitch in [0.0, -0.5, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let result = VoxelMapping::new(MappingConfig::new([0.0; 3], pitch, 4, 3));
        assert!(result.is_err(), "pitch {} accepted", pitch);
    }
}

#[test]
fn infinite_origin_fails_at_construction() {
    let result = VoxelMapping::new(MappingConfig::new([f32::INFINITY, 0.0, 0.0], 1.0, 4, 3));
    assert!(result.is_err());
}

// ────────────────── Rasterization ──────────────────

#[test]
fn single_voxel_grid() {
    let mut m = grid(1, 1.0);
    m.add(&[[0.0, 0.0, 0.0], [0.999, 0.999, 0.999], [1.0, 0.0, 0.0]], &[[0.1; 3]; 3])
        .unwrap();
    assert_eq!(m.grid().occupied_indices(), vec![[0, 0, 0]]);
    assert_eq!(m.as_boxes(&StandardGeometry).unwrap().face_count(), 12);
}

#[test]
fn nan_and_inf_points_are_skipped() {
    let mut m = grid(4, 1.0);
    m.add(
        &[
            [f32::NAN, 1.0, 1.0],
            [1.0, f32::INFINITY, 1.0],
            [1.0, 1.0, f32::NEG_INFINITY],
        ],
        &[[1.0; 3]; 3],
    )
    .unwrap();
    assert_eq!(m.grid().occupied_count(), 0);
}

#[test]
fn huge_coordinates_do_not_wrap_into_grid() {
    let mut m = grid(4, 1e-3);
    m.add(
        &[[1e30, 0.0, 0.0], [-1e30, 0.0, 0.0], [f32::MAX, f32::MAX, f32::MAX]],
        &[[1.0; 3]; 3],
    )
    .unwrap();
    assert_eq!(m.grid().occupied_count(), 0);
}

#[test]
fn negative_near_zero_is_outside() {
    let mut m = grid(4, 1.0);
    m.add(&[[-1e-6, 0.5, 0.5]], &[[1.0; 3]]).unwrap();
    assert_eq!(m.grid().occupied_count(), 0);
}

#[test]
fn mismatched_lengths_are_rejected_without_side_effects() {
    let mut m = grid(4, 1.0);
    m.add(&[[0.5, 0.5, 0.5]], &[[0.3, 0.3, 0.3]]).unwrap();
    let before = m.features().to_vec();

    let err = m
        .add(&[[1.5, 1.5, 1.5], [2.5, 2.5, 2.5]], &[vec![1.0f32; 3], vec![1.0]])
        .unwrap_err();
    assert!(matches!(
        err,
        MappingError::ChannelMismatch {
            row: 1,
            expected: 3,
            got: 1
        }
    ));
    assert_eq!(m.grid().occupied_count(), 1);
    assert_eq!(m.features(), &before[..]);

    let err = m
        .add(&[[1.5, 1.5, 1.5], [2.5, 2.5, 2.5], [3.5, 3.5, 3.5]], &[[1.0; 3]; 2])
        .unwrap_err();
    assert!(matches!(err, MappingError::ShapeMismatch { expected: 3, got: 2 }));
    assert_eq!(m.grid().occupied_count(), 1);
}

#[test]
fn occupancy_only_grid_rejects_extra_rows() {
    let mut m = VoxelMapping::new(MappingConfig::new([0.0; 3], 1.0, 4, 0)).unwrap();
    let err = m.add(&[[0.5; 3]; 5], &[[0.0f32; 0]; 7]).unwrap_err();
    assert!(matches!(err, MappingError::ShapeMismatch { expected: 5, got: 7 }));
    assert!(!m.grid().is_allocated());
}

#[test]
fn mismatched_lengths_on_untouched_grid_leave_it_unallocated() {
    let mut m = grid(4, 1.0);
    assert!(m.add(&[[0.5, 0.5, 0.5]], &[[0.0f32; 2]]).is_err());
    assert!(!m.grid().is_allocated());
}

// ────────────────── Synthesis ──────────────────

#[test]
fn full_grid_produces_a_box_per_voxel() {
    let mut m = grid(3, 1.0);
    let mut points = Vec::new();
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                points.push([i as f32 + 0.5, j as f32 + 0.5, k as f32 + 0.5]);
            }
        }
    }
    let values = vec![[0.5; 3]; points.len()];
    m.add(&points, &values).unwrap();
    assert_eq!(m.as_boxes(&StandardGeometry).unwrap().face_count(), 27 * 12);
}

#[test]
fn as_bbox_on_unallocated_grid_does_not_allocate() {
    let m = grid(8, 1.0);
    let geometries = m.as_bbox(&StandardGeometry, BoundsStyle::default());
    assert_eq!(geometries.len(), 2);
    assert!(!m.grid().is_allocated());
}

#[test]
fn factory_trait_objects_are_accepted() {
    struct Null;
    impl GeometryFactory for Null {
        fn solid_box(&self, _: [f32; 3], _: [f32; 3]) -> TriMesh {
            TriMesh::empty()
        }
        fn wired_box(&self, _: [f32; 3], _: [f32; 3]) -> LineSet {
            LineSet::default()
        }
        fn icosphere(&self, _: f32, _: u32) -> TriMesh {
            TriMesh::empty()
        }
    }

    let factories: Vec<Box<dyn GeometryFactory>> = vec![Box::new(Null), Box::new(StandardGeometry)];
    let mut m = grid(2, 1.0);
    m.add(&[[0.5, 0.5, 0.5]], &[[1.0, 1.0, 1.0]]).unwrap();
    let faces: Vec<usize> = factories
        .iter()
        .map(|f| m.as_boxes(f.as_ref()).unwrap().face_count())
        .collect();
    assert_eq!(faces, vec![0, 12]);
}

// ────────────────── Properties ──────────────────

mod properties {
    use super::grid;
    use proptest::prelude::*;
    use voxmap::StandardGeometry;

    fn cloud() -> impl Strategy<Value = Vec<([f32; 3], [f32; 3])>> {
        prop::collection::vec(
            (
                [-2.0f32..6.0, -2.0f32..6.0, -2.0f32..6.0],
                [0.0f32..1.0, 0.0f32..1.0, 0.0f32..1.0],
            ),
            0..200,
        )
    }

    proptest! {
        #[test]
        fn boxes_cover_exactly_the_occupied_cells(rows in cloud()) {
            let points: Vec<[f32; 3]> = rows.iter().map(|r| r.0).collect();
            let values: Vec<[f32; 3]> = rows.iter().map(|r| r.1).collect();
            let mut m = grid(4, 1.0);
            m.add(&points, &values).unwrap();

            let inside = points.iter().filter(|p| m.voxel_of(p).is_some()).count();
            prop_assert!(m.grid().occupied_count() <= inside);
            let mesh = m.as_boxes(&StandardGeometry).unwrap();
            prop_assert_eq!(mesh.face_count(), m.grid().occupied_count() * 12);
        }

        #[test]
        fn repeating_a_batch_changes_nothing(rows in cloud()) {
            let points: Vec<[f32; 3]> = rows.iter().map(|r| r.0).collect();
            let values: Vec<[f32; 3]> = rows.iter().map(|r| r.1).collect();
            let mut m = grid(4, 1.0);
            m.add(&points, &values).unwrap();
            let occupancy = m.occupancy().to_vec();
            let features = m.features().to_vec();

            m.add(&points, &values).unwrap();
            prop_assert_eq!(m.occupancy(), &occupancy[..]);
            prop_assert_eq!(m.features(), &features[..]);
        }

        #[test]
        fn short_value_rows_never_write(rows in cloud(), missing in 1usize..4) {
            prop_assume!(!rows.is_empty());
            let points: Vec<[f32; 3]> = rows.iter().map(|r| r.0).collect();
            let keep = rows.len().saturating_sub(missing);
            let values: Vec<[f32; 3]> = rows.iter().take(keep).map(|r| r.1).collect();
            let mut m = grid(4, 1.0);
            prop_assert!(m.add(&points, &values).is_err());
            prop_assert!(!m.grid().is_allocated());
        }
    }
}
