//! `probe`: scan a delimited file and report the narrowest type per column.

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    cli::ProbeArgs,
    columns::TableColumns,
    data::Value,
    io_utils,
    narrow::TypeCandidate,
    table,
    types::DataType,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnType {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTypes {
    pub rows_scanned: usize,
    pub allow_missing: bool,
    pub columns: Vec<ColumnType>,
}

impl ColumnTypes {
    pub fn data_types(&self) -> Vec<DataType> {
        self.columns.iter().map(|column| column.data_type).collect()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Creating types file {path:?}"))?;
        serde_json::to_writer_pretty(file, self).context("Writing column types JSON")
    }

    fn report_rows(&self) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                vec![
                    (idx + 1).to_string(),
                    column.name.clone(),
                    column.data_type.to_string(),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProbeOptions {
    pub columns: Vec<String>,
    /// Rows to scan before deciding; zero scans everything.
    pub sample_rows: usize,
    pub allow_missing: bool,
}

/// Infers column types from the rows of `reader`.
///
/// Every cell is offered to the engine as text, so an empty cell only fits a
/// numeric column when missing values are allowed.
pub fn infer_column_types<R: Read>(
    reader: &mut csv::Reader<R>,
    encoding: &'static Encoding,
    options: &ProbeOptions,
) -> Result<ColumnTypes> {
    let headers = io_utils::reader_headers(reader, encoding)?;
    let requested = (!options.columns.is_empty()).then_some(options.columns.as_slice());
    let table = TableColumns::from_header(&headers, requested, None)?;
    let mut candidates = vec![TypeCandidate::new(options.allow_missing); table.len()];

    let mut record = csv::ByteRecord::new();
    let mut scanned = 0usize;
    while reader.read_byte_record(&mut record)? {
        if options.sample_rows > 0 && scanned >= options.sample_rows {
            break;
        }
        scanned += 1;
        let row = io_utils::decode_record(&record, encoding)
            .with_context(|| format!("Decoding row {scanned}"))?
            .into_iter()
            .map(Value::Text)
            .collect::<Vec<_>>();
        for (candidate, cell) in candidates.iter_mut().zip(table.select(&row)) {
            candidate.update(&cell);
        }
    }
    debug!("Scanned {scanned} row(s) across {} column(s)", table.len());

    let columns = table
        .columns()
        .iter()
        .zip(&candidates)
        .map(|(column, candidate)| ColumnType {
            name: column.name().to_string(),
            data_type: candidate.decide(),
        })
        .collect();
    Ok(ColumnTypes {
        rows_scanned: scanned,
        allow_missing: options.allow_missing,
        columns,
    })
}

pub fn execute(args: &ProbeArgs) -> Result<()> {
    let delimiter = io_utils::resolve_delimiter(Some(&args.input), args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    info!(
        "Probing {:?} with delimiter '{}' and encoding {}",
        args.input,
        crate::printable_delimiter(delimiter),
        encoding.name()
    );
    let options = ProbeOptions {
        columns: args.columns.clone(),
        sample_rows: args.sample_rows,
        allow_missing: args.allow_missing,
    };
    let mut reader = io_utils::open_csv_reader_from_path(&args.input, delimiter)?;
    let types = infer_column_types(&mut reader, encoding, &options)
        .with_context(|| format!("Inferring column types from {:?}", args.input))?;

    table::print_table(&["#", "column", "type"], &types.report_rows());

    if let Some(output) = &args.output {
        types
            .save(output)
            .with_context(|| format!("Writing column types to {output:?}"))?;
        info!(
            "Column types for {} column(s) written to {output:?}",
            types.columns.len()
        );
    }
    Ok(())
}
