use super::*;

#[test]
fn can_collect_range_in_order() {
    let result = parallel_collect_range(1000, |idx| idx * 2);

    assert_eq!(result, (0..1000).map(|idx| idx * 2).collect::<Vec<_>>());
}

#[test]
fn can_use_map_reduce_for_slice() {
    let vec = vec![1, 2, 3];

    let result = map_reduce(vec.as_slice(), |item| *item, || 0, |a, b| a + b);

    assert_eq!(result, 6);
}
