use super::*;
use crate::helpers::models::create_matrix;

#[test]
fn can_get_grid_state() {
    let grid = Grid::with_weights(3, 1, create_matrix(&[&[0., 0.], &[3., 4.], &[3., 0.]])).unwrap();
    let mapping = Mapping { indices: vec![1, 1, 2], distances: vec![0., 0., 0.] };

    let state = get_grid_state(&grid, Some(&mapping));

    assert_eq!(state.shape, (3, 1, 2));
    assert_eq!(state.nodes.len(), 3);
    assert_eq!(state.nodes[2].coordinate, Coordinate(2, 0));
    assert_float_eq!(state.nodes[0].unified_distance, 5.);
    assert_float_eq!(state.nodes[1].unified_distance, 4.5);
    assert_float_eq!(state.nodes[2].unified_distance, 4.);
    assert_eq!(state.nodes.iter().map(|node| node.hits).collect::<Vec<_>>(), vec![0, 2, 1]);
    assert_eq!(state.nodes[1].weights, vec![3., 4.]);
}

#[test]
fn can_get_grid_state_without_mapping() {
    let grid = Grid::with_weights(1, 1, create_matrix(&[&[1., 2.]])).unwrap();

    let state = get_grid_state(&grid, None);

    assert_eq!(state.nodes[0].hits, 0);
    assert_eq!(state.nodes[0].unified_distance, 0.);
}

#[test]
fn can_format_grid_state() {
    let grid = Grid::with_weights(2, 1, create_matrix(&[&[0., 0.], &[3., 4.]])).unwrap();
    let mapping = Mapping { indices: vec![0], distances: vec![0.] };

    let state = get_grid_state(&grid, Some(&mapping));

    assert_eq!(
        state.to_string(),
        "(2,1,2,[(0,0,5.0000000,1,[0.0000000,0.0000000]),(1,0,5.0000000,0,[3.0000000,4.0000000]),])"
    );
}
