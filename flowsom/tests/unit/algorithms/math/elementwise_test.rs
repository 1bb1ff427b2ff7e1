use super::*;
use crate::helpers::models::create_matrix;
use crate::models::StridedView;

#[test]
fn can_square_elements() {
    let matrix = create_matrix(&[&[1., 2.], &[4., 5.]]);

    let result = square(&matrix).unwrap();

    assert_eq!(result, create_matrix(&[&[1., 4.], &[16., 25.]]));
}

#[test]
fn can_reject_non_square_input() {
    let matrix = create_matrix(&[&[1., 2., 3.], &[4., 5., 6.]]);

    let result = square(&matrix);

    assert_eq!(result, Err(SomError::InvalidShape { rows: 2, cols: 3 }));
}

#[test]
fn can_reject_strided_input() {
    let matrix = create_matrix(&[&[1., 2., 3., 4.], &[5., 6., 7., 8.]]);
    let view = matrix.view().columns(0, 2).unwrap();

    let result = square(&view);

    assert!(matches!(result, Err(SomError::InvalidLayout(_))));
}

#[test]
fn can_reject_transposed_input() {
    let data = [1., 2., 3., 4.];
    let view = StridedView::row_major(&data, 2, 2).unwrap().transpose();

    assert!(matches!(square(&view), Err(SomError::InvalidLayout(_))));
}
