//! Reading and writing of numeric tables in csv format.

#[cfg(test)]
#[path = "../../tests/unit/extensions/table_test.rs"]
mod table_test;

use flowsom::algorithms::som::Mapping;
use flowsom::models::Matrix;
use flowsom::utils::{Float, GenericError, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read, Write};

/// A numeric table: named columns (markers) and one row per observation.
#[derive(Clone, Debug)]
pub struct Table {
    /// Column names.
    pub header: Vec<String>,
    /// Table values.
    pub data: Matrix,
}

#[derive(Debug, Deserialize)]
struct ClusterRecord {
    cluster: usize,
}

/// Reads a table from csv with a header row. All values should be numeric.
pub fn read_table<R: Read>(reader: BufReader<R>) -> GenericResult<Table> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let header = reader
        .headers()
        .map_err(|err| format!("cannot read table header: '{err}'"))?
        .iter()
        .map(|name| name.to_string())
        .collect::<Vec<_>>();

    if header.iter().all(|name| name.is_empty()) {
        return Err("table has no columns".into());
    }

    let mut data = Vec::new();
    let mut rows = 0;

    for (idx, record) in reader.deserialize::<Vec<Float>>().enumerate() {
        let record = record.map_err(|err| format!("cannot read table row {}: '{err}'", idx + 1))?;
        data.extend(record);
        rows += 1;
    }

    let data = Matrix::new(rows, header.len(), data)?;

    Ok(Table { header, data })
}

/// Writes a table as csv with the given header.
pub fn write_table<W: Write>(writer: W, header: &[String], data: &Matrix) -> GenericResult<()> {
    if header.len() != data.ncols() {
        return Err(format!("header has {} columns, data has {}", header.len(), data.ncols()).into());
    }

    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(header).map_err(to_generic_error)?;
    data.rows_iter()
        .try_for_each(|row| writer.write_record(row.iter().map(|value| value.to_string())))
        .map_err(to_generic_error)?;

    writer.flush().map_err(GenericError::from)
}

/// Writes nearest node index and distance per row as csv with `cluster,distance` columns.
pub fn write_mapping<W: Write>(writer: W, mapping: &Mapping) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(["cluster", "distance"]).map_err(to_generic_error)?;
    mapping
        .indices
        .iter()
        .zip(mapping.distances.iter())
        .try_for_each(|(index, distance)| writer.write_record([index.to_string(), distance.to_string()]))
        .map_err(to_generic_error)?;

    writer.flush().map_err(GenericError::from)
}

/// Reads cluster assignment per row from csv with `cluster` column, other columns are ignored.
pub fn read_clusters<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<usize>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    reader
        .deserialize::<ClusterRecord>()
        .enumerate()
        .map(|(idx, record)| {
            record
                .map(|record| record.cluster)
                .map_err(|err| GenericError::from(format!("cannot read cluster row {}: '{err}'", idx + 1)))
        })
        .collect()
}

fn to_generic_error(err: csv::Error) -> GenericError {
    format!("cannot write csv: '{err}'").into()
}
