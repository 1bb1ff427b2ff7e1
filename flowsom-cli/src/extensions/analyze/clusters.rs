#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze/clusters_test.rs"]
mod clusters_test;

use crate::extensions::table::{read_clusters, read_table};
use flowsom::models::Matrix;
use flowsom::utils::{Float, GenericResult};
use rustc_hash::FxHashMap;
use std::io::{BufReader, Read, Write};

/// Keeps per feature mean values of rows assigned to one cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterSummary {
    /// Cluster index.
    pub cluster: usize,
    /// Mean value of each feature.
    pub means: Vec<Float>,
    /// Amount of rows in the cluster.
    pub count: usize,
}

/// Groups data rows by their cluster and calculates mean feature values of each group.
/// Summaries are ordered by cluster index, clusters without rows are omitted.
pub fn get_cluster_means(data: &Matrix, clusters: &[usize]) -> GenericResult<Vec<ClusterSummary>> {
    if data.nrows() != clusters.len() {
        return Err(format!("data has {} rows, but {} cluster assignments are given", data.nrows(), clusters.len()).into());
    }

    let groups = data.rows_iter().zip(clusters.iter()).fold(
        FxHashMap::<usize, (Vec<Float>, usize)>::default(),
        |mut groups, (row, &cluster)| {
            let (sums, count) = groups.entry(cluster).or_insert_with(|| (vec![0.; row.len()], 0));
            sums.iter_mut().zip(row.iter()).for_each(|(sum, value)| *sum += value);
            *count += 1;

            groups
        },
    );

    let mut summaries = groups
        .into_iter()
        .map(|(cluster, (sums, count))| ClusterSummary {
            cluster,
            means: sums.into_iter().map(|sum| sum / count as Float).collect(),
            count,
        })
        .collect::<Vec<_>>();
    summaries.sort_by_key(|summary| summary.cluster);

    Ok(summaries)
}

/// Writes cluster summaries as csv with `cluster,<features...>,count` columns.
pub fn write_cluster_means<W: Write>(writer: W, header: &[String], summaries: &[ClusterSummary]) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    let header = std::iter::once("cluster").chain(header.iter().map(|name| name.as_str())).chain(std::iter::once("count"));
    writer.write_record(header).map_err(|err| format!("cannot write header: '{err}'"))?;

    summaries.iter().try_for_each(|summary| {
        let record = std::iter::once(summary.cluster.to_string())
            .chain(summary.means.iter().map(|mean| mean.to_string()))
            .chain(std::iter::once(summary.count.to_string()));

        writer.write_record(record).map_err(|err| format!("cannot write cluster summary: '{err}'"))
    })?;

    writer.flush().map_err(|err| format!("cannot flush output: '{err}'").into())
}

/// Reads data and cluster assignments and writes mean feature values per cluster.
pub fn analyze_clusters<R1: Read, R2: Read, W: Write>(
    data_reader: BufReader<R1>,
    clusters_reader: BufReader<R2>,
    writer: W,
) -> GenericResult<()> {
    let table = read_table(data_reader)?;
    let clusters = read_clusters(clusters_reader)?;

    let summaries = get_cluster_means(&table.data, clusters.as_slice())?;

    write_cluster_means(writer, table.header.as_slice(), summaries.as_slice())
}
