use super::*;
use crate::algorithms::math::euclidean;
use crate::helpers::models::{create_clustered_data, create_matrix, to_column_major};
use crate::models::{Matrix, StridedView};

#[test]
fn can_map_rows_to_nearest_nodes() {
    let nodes = create_matrix(&[&[0., 0.], &[10., 10.]]);
    let data = create_matrix(&[&[1., 0.], &[9., 10.], &[10., 13.], &[0., 0.]]);

    let mapping = map_to_nearest(&nodes, &data).unwrap();

    assert_eq!(mapping.indices, vec![0, 1, 1, 0]);
    assert_eq!(mapping.distances, vec![1., 1., 3., 0.]);
}

#[test]
fn can_guarantee_no_strictly_closer_node() {
    let nodes = create_clustered_data(5, 3, 4);
    let data = create_clustered_data(3, 30, 4);

    let mapping = map_to_nearest(&nodes, &data).unwrap();

    assert_eq!(mapping.len(), data.nrows());
    data.rows_iter().enumerate().for_each(|(row, values)| {
        let index = mapping.indices[row];
        assert!(index < nodes.nrows());
        assert_float_eq!(mapping.distances[row], euclidean(values, nodes.row(index)));
        assert!(nodes.rows_iter().all(|node| euclidean(values, node) >= mapping.distances[row]));
    });
}

#[test]
fn can_map_regardless_of_input_layout() {
    let nodes = create_clustered_data(3, 2, 3);
    let data = create_clustered_data(3, 10, 3);
    let nodes_data = to_column_major(&nodes);
    let data_data = to_column_major(&data);
    let nodes_view = StridedView::column_major(nodes_data.as_slice(), 6, 3).unwrap();
    let data_view = StridedView::column_major(data_data.as_slice(), 30, 3).unwrap();

    let expected = map_to_nearest(&nodes, &data).unwrap();
    let actual = map_to_nearest(&nodes_view, &data_view).unwrap();

    assert_eq!(expected, actual);
}

#[test]
fn can_map_strided_subset_of_rows() {
    let nodes = create_matrix(&[&[0., 0.], &[10., 10.]]);
    let data = create_matrix(&[&[0., 1.], &[10., 10.], &[9., 9.], &[10., 10.]]);

    let mapping = map_to_nearest(&nodes, &data.view().step_rows(2).unwrap()).unwrap();

    assert_eq!(mapping.indices, vec![0, 1]);
}

#[test]
fn can_return_dimension_mismatch() {
    let nodes = create_matrix(&[&[0., 0., 0.]]);
    let data = create_matrix(&[&[0., 0.]]);

    assert_eq!(map_to_nearest(&nodes, &data), Err(SomError::DimensionMismatch { expected: 3, actual: 2 }));
}

#[test]
fn can_reject_empty_nodes() {
    let result = map_to_nearest(&Matrix::zeros(0, 2), &create_matrix(&[&[0., 0.]]));

    assert!(matches!(result, Err(SomError::EmptyInput(_))));
}

#[test]
fn can_map_empty_data() {
    let mapping = map_to_nearest(&create_matrix(&[&[0., 0.]]), &Matrix::zeros(0, 2)).unwrap();

    assert!(mapping.is_empty());
}

#[test]
fn can_calculate_mapping_statistics() {
    let mapping = Mapping { indices: vec![0, 2, 2, 7], distances: vec![1., 2., 3., 2.] };

    assert_float_eq!(mapping.quantization_error(), 2.);
    assert_eq!(mapping.hits(3), vec![1, 0, 2]);
    assert_eq!(Mapping::default().quantization_error(), 0.);
}
