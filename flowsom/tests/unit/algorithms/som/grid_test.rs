use super::*;
use crate::helpers::models::create_matrix;
use crate::helpers::utils::random::{EchoRandom, FakeRandom};
use crate::utils::DefaultRandom;

#[test]
fn can_enumerate_nodes_in_row_major_order() {
    let grid = Grid::new(3, 2, 4).unwrap();

    assert_eq!(grid.size(), 6);
    assert_eq!(grid.feature_count(), 4);
    assert_eq!(grid.coordinates()[1], Coordinate(1, 0));
    assert_eq!(grid.coordinates()[4], Coordinate(1, 1));
    assert_eq!(grid.index_of(&Coordinate(2, 1)), Some(5));
    assert_eq!(grid.index_of(&Coordinate(3, 0)), None);
    assert_eq!(grid.index_of(&Coordinate(0, -1)), None);
}

#[test]
fn can_reject_invalid_grid() {
    assert!(matches!(Grid::new(0, 2, 4), Err(SomError::EmptyInput(_))));
    assert!(matches!(Grid::new(2, 2, 0), Err(SomError::EmptyInput(_))));
    assert_eq!(
        Grid::with_weights(2, 2, Matrix::zeros(3, 2)).err(),
        Some(SomError::InvalidShape { rows: 3, cols: 2 })
    );
}

parameterized_test! {can_measure_lattice_distance, (metric, expected), {
    can_measure_lattice_distance_impl(metric, expected);
}}

can_measure_lattice_distance! {
    case01_chebyshev: (GridMetric::Chebyshev, 2.),
    case02_euclidean: (GridMetric::Euclidean, (5. as Float).sqrt()),
    case03_manhattan: (GridMetric::Manhattan, 3.),
}

fn can_measure_lattice_distance_impl(metric: GridMetric, expected: Float) {
    let grid = Grid::new(3, 2, 1).unwrap();

    let distances = grid.neighbourhood_distances(metric);

    assert_eq!((distances.nrows(), distances.ncols()), (6, 6));
    assert_float_eq!(distances.row(0)[5], expected);
    assert_float_eq!(distances.row(5)[0], expected);
    assert_eq!(distances.row(3)[3], 0.);
}

#[test]
fn can_find_lattice_neighbours() {
    let grid = Grid::new(3, 2, 1).unwrap();

    assert_eq!(grid.lattice_neighbours(0).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(grid.lattice_neighbours(4).collect::<Vec<_>>(), vec![3, 5, 1]);
}

#[test]
fn can_initialize_from_sampled_rows_without_replacement() {
    let data = create_matrix(&[&[0., 0.], &[1., 1.], &[2., 2.], &[3., 3.]]);
    let mut grid = Grid::new(2, 1, 2).unwrap();

    grid.initialize(&data, InitMethod::Sample, &FakeRandom::new(vec![2, 3], vec![])).unwrap();

    assert_eq!(grid.weights(), &create_matrix(&[&[2., 2.], &[3., 3.]]));
}

#[test]
fn can_initialize_from_sampled_rows_with_replacement() {
    let data = create_matrix(&[&[0., 0.], &[1., 1.]]);
    let mut grid = Grid::new(2, 2, 2).unwrap();

    grid.initialize(&data, InitMethod::Sample, &FakeRandom::new(vec![1, 1, 0, 1], vec![])).unwrap();

    assert_eq!(grid.weights(), &create_matrix(&[&[1., 1.], &[1., 1.], &[0., 0.], &[1., 1.]]));
}

#[test]
fn can_initialize_within_feature_ranges() {
    let data = create_matrix(&[&[0., 5., Float::NAN], &[-2., 7., Float::NAN], &[1., 6., Float::NAN]]);
    let mut grid = Grid::new(2, 1, 3).unwrap();

    grid.initialize(&data, InitMethod::Range, &EchoRandom::new(true)).unwrap();
    assert_eq!(grid.weights().row(0), &[-2., 5., 0.]);

    grid.initialize(&data, InitMethod::Range, &EchoRandom::new(false)).unwrap();
    assert_eq!(grid.weights().row(1), &[1., 7., 0.]);
}

#[test]
fn can_reject_range_initialization_with_unbounded_span() {
    let random = DefaultRandom::new_repeatable();

    [
        create_matrix(&[&[-1e308], &[1e308]]),
        create_matrix(&[&[0.], &[Float::INFINITY]]),
        create_matrix(&[&[Float::NEG_INFINITY], &[Float::NAN]]),
    ]
    .iter()
    .for_each(|data| {
        let mut grid = Grid::new(2, 1, 1).unwrap();

        let result = grid.initialize(data, InitMethod::Range, &random);

        assert!(matches!(result, Err(SomError::InvalidParameter(_))));
    });
}

#[test]
fn can_reject_initialization_from_incompatible_data() {
    let mut grid = Grid::new(2, 1, 3).unwrap();
    let random = EchoRandom::new(true);

    assert_eq!(
        grid.initialize(&create_matrix(&[&[0., 0.]]), InitMethod::Sample, &random),
        Err(SomError::DimensionMismatch { expected: 3, actual: 2 })
    );
    assert!(matches!(grid.initialize(&Matrix::zeros(0, 3), InitMethod::Sample, &random), Err(SomError::EmptyInput(_))));
}

parameterized_test! {can_get_quantile, (values, probability, expected), {
    assert_float_eq!(get_quantile(values.as_slice(), probability), expected);
}}

can_get_quantile! {
    case01_empty: (Vec::<Float>::new(), 0.5, 0.),
    case02_single: (vec![3.], 0.67, 3.),
    case03_median: (vec![0., 1., 2., 3., 4.], 0.5, 2.),
    case04_interpolated: (vec![0., 10.], 0.25, 2.5),
    case05_max: (vec![0., 1., 2.], 1., 2.),
}

#[test]
fn can_get_default_radius() {
    let small = Grid::new(2, 1, 1).unwrap().neighbourhood_distances(GridMetric::Chebyshev);
    let large = Grid::new(10, 10, 1).unwrap().neighbourhood_distances(GridMetric::Chebyshev);

    assert_float_eq!(get_default_radius(&small), 1.);
    assert!(get_default_radius(&large) > 3.);
    assert!(get_default_radius(&large) < 9.);
}
