use super::*;
use flowsom_cli::extensions::table::read_clusters;

const SAMPLE_DATA_PATH: &str = "../data/sample.csv";

fn create_nodes_file(content: &str) -> tempfile::NamedTempFile {
    let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
    tmpfile.write_all(content.as_bytes()).unwrap();

    tmpfile
}

fn run_map_with_files(nodes: &tempfile::NamedTempFile, out_result: &tempfile::NamedTempFile) -> Result<(), String> {
    let args = vec![
        "map",
        nodes.path().to_str().unwrap(),
        SAMPLE_DATA_PATH,
        "--out-result",
        out_result.path().to_str().unwrap(),
    ];
    let matches = get_map_app().try_get_matches_from(args).unwrap();

    run_map(&matches, create_write_buffer)
}

#[test]
fn can_run_map() {
    let nodes = create_nodes_file("CD3,CD4,CD8,CD19\n1,5,0.5,0.2\n6,0.5,4,0.3\n0.4,0.6,0.3,7\n");
    let out_result = tempfile::NamedTempFile::new().unwrap();

    run_map_with_files(&nodes, &out_result).unwrap();

    let clusters = read_clusters(BufReader::new(File::open(out_result.path()).unwrap())).unwrap();
    assert_eq!(clusters.len(), 30);
    assert!(clusters.iter().enumerate().all(|(row, &cluster)| cluster == row % 3));
}

#[test]
fn can_reject_nodes_with_other_markers() {
    let nodes = create_nodes_file("CD3,CD4,CD8,CD20\n1,5,0.5,0.2\n");
    let out_result = tempfile::NamedTempFile::new().unwrap();

    let result = run_map_with_files(&nodes, &out_result);

    assert!(result.unwrap_err().contains("markers differ"));
}

#[test]
fn can_reject_nodes_with_other_dimension() {
    let nodes = create_nodes_file("CD3,CD4,CD8\n1,5,0.5\n");
    let out_result = tempfile::NamedTempFile::new().unwrap();

    let result = run_map_with_files(&nodes, &out_result);

    assert!(result.unwrap_err().contains("dimension mismatch: expected 3 features, got 4"));
}
