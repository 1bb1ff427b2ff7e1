use super::*;

#[test]
fn can_read_table() {
    let table_csv = r"CD3, CD4 ,CD8
1.5,2,3
-4,5e-1, 6
NaN,0,1
";

    let table = read_table(BufReader::new(table_csv.as_bytes())).unwrap();

    assert_eq!(table.header, vec!["CD3", "CD4", "CD8"]);
    assert_eq!((table.data.nrows(), table.data.ncols()), (3, 3));
    assert_eq!(table.data.row(1), &[-4., 0.5, 6.]);
    assert!(table.data.row(2)[0].is_nan());
}

#[test]
fn can_read_table_without_rows() {
    let table = read_table(BufReader::new("CD3,CD4\n".as_bytes())).unwrap();

    assert_eq!((table.data.nrows(), table.data.ncols()), (0, 2));
}

#[test]
fn can_propagate_format_errors() {
    let non_numeric = "CD3,CD4\n1,2\n3,abc\n";
    let ragged = "CD3,CD4\n1,2\n3\n";

    let non_numeric = read_table(BufReader::new(non_numeric.as_bytes())).err().unwrap().to_string();
    let ragged = read_table(BufReader::new(ragged.as_bytes())).err();

    assert!(non_numeric.starts_with("cannot read table row 2"));
    assert!(ragged.is_some());
    assert!(read_table(BufReader::new("".as_bytes())).is_err());
}

#[test]
fn can_write_table() {
    let header = vec!["CD3".to_string(), "CD4".to_string()];
    let data = Matrix::new(2, 2, vec![1., 2.5, -3., 0.125]).unwrap();
    let mut buffer = Vec::new();

    write_table(&mut buffer, header.as_slice(), &data).unwrap();

    let result = String::from_utf8(buffer).unwrap();
    assert_eq!(result.lines().collect::<Vec<_>>(), vec!["CD3,CD4", "1,2.5", "-3,0.125"]);
}

#[test]
fn can_reject_header_of_different_size() {
    let data = Matrix::zeros(1, 3);

    assert!(write_table(Vec::new(), &["CD3".to_string()], &data).is_err());
}

#[test]
fn can_write_and_read_mapping() {
    let mapping = Mapping { indices: vec![2, 0, 1], distances: vec![0.5, 1., 0.] };
    let mut buffer = Vec::new();

    write_mapping(&mut buffer, &mapping).unwrap();
    let clusters = read_clusters(BufReader::new(buffer.as_slice())).unwrap();

    assert_eq!(String::from_utf8(buffer.clone()).unwrap().lines().next(), Some("cluster,distance"));
    assert_eq!(clusters, vec![2, 0, 1]);
}

#[test]
fn can_reject_invalid_clusters() {
    assert!(read_clusters(BufReader::new("cluster\n1\n-1\n".as_bytes())).is_err());
    assert!(read_clusters(BufReader::new("index\n1\n".as_bytes())).is_err());
}
