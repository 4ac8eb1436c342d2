//! Property tests for histogram construction and algebra

mod common;

use common::*;
use proptest::prelude::*;
use varbin_core::{Dataset, MatrixDataset};
use varbin_histogram::{
    build_histogram, BinGrid, BinSet, GridBuilder, HistogramBuilder, HistogramOps, SparseHistogram,
};

fn dataset_strategy() -> impl Strategy<Value = MatrixDataset> {
    (1usize..4).prop_flat_map(|dims| {
        prop::collection::vec(0.0f64..1.0, dims..dims * 200).prop_map(move |mut values| {
            values.truncate(values.len() / dims * dims);
            MatrixDataset::new(dims, values).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn prop_histogram_mass_sums_to_one(data in dataset_strategy(), nbins in 1usize..40) {
        let grid = BinGrid::uniform(data.dims(), 0.0, 1.0, nbins).unwrap();
        let hist = build_histogram(&data, &grid).unwrap();

        prop_assert!((hist.total_mass() - 1.0).abs() < EPSILON);
        prop_assert!(hist.len() <= data.len());
    }

    #[test]
    fn prop_self_comparison_is_identity(data in dataset_strategy(), nbins in 1usize..40) {
        let grid = BinGrid::uniform(data.dims(), 0.0, 1.0, nbins).unwrap();
        let hist = build_histogram(&data, &grid).unwrap();

        prop_assert_eq!(hist.l1_distance(&hist), 0.0);
        prop_assert_eq!(hist.l2_distance(&hist), 0.0);
        prop_assert_eq!(hist.intersection(&hist), hist.clone());
        prop_assert!(hist.residual(&hist).is_empty());
    }

    #[test]
    fn prop_distances_symmetric_and_bounded(seed_a in any::<u64>(), seed_b in any::<u64>(), nbins in 1usize..16) {
        let grid = BinGrid::uniform(2, 0.0, 1.0, nbins).unwrap();
        let h1 = build_histogram(&uniform_points(100, 2, seed_a), &grid).unwrap();
        let h2 = build_histogram(&uniform_points(150, 2, seed_b), &grid).unwrap();

        let l1 = h1.l1_distance(&h2);
        prop_assert_eq!(l1, h2.l1_distance(&h1));
        prop_assert_eq!(h1.l2_distance(&h2), h2.l2_distance(&h1));
        prop_assert!((0.0..=2.0 + EPSILON).contains(&l1));
        prop_assert!(h1.l2_distance(&h2) <= l1 + EPSILON);
    }

    #[test]
    fn prop_residuals_carry_unshared_mass(seed_a in any::<u64>(), seed_b in any::<u64>(), nbins in 1usize..16) {
        let grid = BinGrid::uniform(2, 0.0, 1.0, nbins).unwrap();
        let h1 = build_histogram(&uniform_points(80, 2, seed_a), &grid).unwrap();
        let h2 = build_histogram(&uniform_points(120, 2, seed_b), &grid).unwrap();

        let shared = h1.intersection(&h2);
        let r1 = h1.residual(&shared);
        let r2 = h2.residual(&shared);

        prop_assert!((r1.total_mass() - (1.0 - shared.total_mass())).abs() < 1e-9);
        prop_assert!((r2.total_mass() - (1.0 - shared.total_mass())).abs() < 1e-9);
        // Residuals never overlap: each cell keeps mass on at most one side
        prop_assert!(r1.intersection(&r2).is_empty());
        // Removing shared mass removes it from the distance too
        prop_assert!((r1.l1_distance(&r2) - h1.l1_distance(&h2)).abs() < 1e-9);
    }

    #[test]
    fn prop_weighted_point_keys_match_direct_build(data in dataset_strategy(), nbins in 1usize..40) {
        let grid = BinGrid::uniform(data.dims(), 0.0, 1.0, nbins).unwrap();
        let builder = GridBuilder::new(&grid);
        let keys = builder.cell_keys(&data).unwrap();
        prop_assert_eq!(keys.len(), data.len());

        let weight = 1.0 / data.len() as f64;
        let weighted = SparseHistogram::from_cells(keys.iter().map(|&key| (key, weight)));
        let built = builder.build(&data).unwrap();

        prop_assert_eq!(
            weighted.keys().collect::<Vec<_>>(),
            built.keys().collect::<Vec<_>>()
        );
        for (key, mass) in built.iter() {
            prop_assert!((weighted.get(key) - mass).abs() < EPSILON);
        }
    }
}

#[test]
fn test_disjoint_ranges_share_nothing() {
    let grid = BinGrid::uniform(2, 0.0, 1.0, 8).unwrap();
    let low = build_histogram(&points_in(300, 2, 0.0, 0.45, 7), &grid).unwrap();
    let high = build_histogram(&points_in(300, 2, 0.55, 1.0, 8), &grid).unwrap();

    let shared = low.intersection(&high);
    assert!(shared.is_empty());
    assert_eq!(low.residual(&shared), low);
    assert_eq!(high.residual(&shared), high);
    assert_relative_eq!(low.l1_distance(&high), 2.0, epsilon = EPSILON);
}

#[test]
fn test_bin_set_reference_values() {
    let bins = BinSet::uniform(0.0, 10.0, 5).unwrap();
    assert_eq!(bins.boundaries(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(bins.index_of(0.0), 0);
    assert_eq!(bins.index_of(3.0), 1);
    assert_eq!(bins.index_of(9.999_999_99), 4);
    assert_eq!(bins.index_of(42.0), 4);
}

#[test]
fn test_one_point_per_cell() {
    // Each point lands in its own cell of a 4x4 grid
    let rows: Vec<[f64; 2]> = (0..4)
        .flat_map(|x| (0..4).map(move |y| [x as f64 * 0.25 + 0.1, y as f64 * 0.25 + 0.1]))
        .collect();
    let data = MatrixDataset::from_rows(&rows).unwrap();
    let grid = BinGrid::uniform(2, 0.0, 1.0, 4).unwrap();

    let hist = build_histogram(&data, &grid).unwrap();
    assert_eq!(hist.len(), 16);
    assert!(hist.iter().all(|(_, mass)| mass == 1.0 / 16.0));
    assert_eq!(
        hist.keys().collect::<Vec<_>>(),
        (0..16).collect::<Vec<u64>>()
    );
}

#[test]
fn test_from_cells_matches_manual_histogram() {
    let grid = BinGrid::uniform(1, 0.0, 1.0, 2).unwrap();
    let data = MatrixDataset::new(1, vec![0.1, 0.6, 0.7, 0.8]).unwrap();
    let expected = SparseHistogram::from_cells([(0, 0.25), (1, 0.75)]);
    assert_eq!(build_histogram(&data, &grid).unwrap(), expected);
}
