//! `convert`: turn every row of a delimited file into typed values.
//!
//! With reader names each selected column is converted by the named default
//! reader. Without them the rows are buffered, each column's narrowest type is
//! inferred from the full data, and every row is narrowed to those types.

use std::io::{Read, Write};

use anyhow::{Context, Result, bail};
use encoding_rs::Encoding;
use log::{debug, info};

use crate::{
    cell_readers::CellReaders,
    cli::{ConvertArgs, OutputFormat},
    columns::TableColumns,
    data::Value,
    io_utils,
    narrow::{calc_narrowest_type, narrow_row},
    reader::BooleanReader,
    types::DataType,
};

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Default reader name per selected column; empty means infer.
    pub reader_names: Vec<String>,
    pub columns: Vec<String>,
    pub allow_missing: bool,
    pub boolean: BooleanReader,
}

/// Column names, the type each column was read as, and the converted rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    pub columns: Vec<String>,
    pub types: Vec<DataType>,
    pub rows: Vec<Vec<Value>>,
}

fn read_rows<R: Read>(
    reader: &mut csv::Reader<R>,
    encoding: &'static Encoding,
    mut on_row: impl FnMut(usize, Vec<Value>) -> Result<()>,
) -> Result<usize> {
    let mut record = csv::ByteRecord::new();
    let mut row_number = 0usize;
    while reader.read_byte_record(&mut record)? {
        row_number += 1;
        let row = io_utils::decode_record(&record, encoding)
            .with_context(|| format!("Decoding row {row_number}"))?
            .into_iter()
            .map(Value::Text)
            .collect();
        on_row(row_number, row)?;
    }
    Ok(row_number)
}

pub fn convert_rows<R: Read>(
    reader: &mut csv::Reader<R>,
    encoding: &'static Encoding,
    options: &ConvertOptions,
) -> Result<Converted> {
    let headers = io_utils::reader_headers(reader, encoding)?;
    let requested = (!options.columns.is_empty()).then_some(options.columns.as_slice());

    if !options.reader_names.is_empty() {
        let readers = CellReaders::with_boolean_reader(options.boolean.clone())
            .generate(&options.reader_names)?;
        let table = TableColumns::from_header(&headers, requested, Some(readers))?;
        let mut rows = Vec::new();
        read_rows(reader, encoding, |row_number, row| {
            let typed = table
                .read_row(&row)
                .with_context(|| format!("Converting row {row_number}"))?;
            rows.push(typed);
            Ok(())
        })?;
        return Ok(Converted {
            columns: table.columns_read().into_iter().map(str::to_string).collect(),
            types: table.column_types(),
            rows,
        });
    }

    let table = TableColumns::from_header(&headers, requested, None)?;
    let mut raw = Vec::new();
    read_rows(reader, encoding, |_, row| {
        raw.push(table.select(&row));
        Ok(())
    })?;

    let types = (0..table.len())
        .map(|idx| {
            let column = raw.iter().map(|row| row[idx].clone()).collect::<Vec<_>>();
            calc_narrowest_type(&column, options.allow_missing)
        })
        .collect::<Vec<_>>();
    debug!("Inferred column types: {types:?}");

    let rows = raw
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            narrow_row(row, &types, options.allow_missing)
                .with_context(|| format!("Converting row {}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Converted {
        columns: table.columns_read().into_iter().map(str::to_string).collect(),
        types,
        rows,
    })
}

pub fn write_csv<W: Write>(converted: &Converted, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(&converted.columns)?;
    for row in &converted.rows {
        writer.write_record(row.iter().map(Value::as_cell))?;
    }
    writer.flush()?;
    Ok(())
}

/// One JSON object per line, keyed by column name.
pub fn write_json_lines<W: Write>(converted: &Converted, mut writer: W) -> Result<()> {
    for row in &converted.rows {
        let object = converted
            .columns
            .iter()
            .zip(row)
            .map(|(name, value)| serde_json::to_value(value).map(|json| (name.clone(), json)))
            .collect::<Result<serde_json::Map<_, _>, _>>()?;
        serde_json::to_writer(&mut writer, &object)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn boolean_reader(args: &ConvertArgs) -> Result<BooleanReader> {
    let reader = match (args.true_values.is_empty(), args.false_values.is_empty()) {
        (true, true) => BooleanReader::default(),
        (false, false) => BooleanReader::new(args.true_values.clone(), args.false_values.clone()),
        _ => bail!("--true-values and --false-values must be given together"),
    };
    Ok(reader.case_sensitive(args.case_sensitive_booleans))
}

pub fn execute(args: &ConvertArgs) -> Result<()> {
    let delimiter = io_utils::resolve_delimiter(Some(&args.input), args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let options = ConvertOptions {
        reader_names: args.types.clone(),
        columns: args.columns.clone(),
        allow_missing: args.allow_missing,
        boolean: boolean_reader(args)?,
    };
    info!(
        "Converting {:?} with {}",
        args.input,
        if options.reader_names.is_empty() {
            "inferred column types".to_string()
        } else {
            format!("readers [{}]", options.reader_names.join(", "))
        }
    );

    let mut reader = io_utils::open_csv_reader_from_path(&args.input, delimiter)?;
    let converted = convert_rows(&mut reader, encoding, &options)
        .with_context(|| format!("Converting {:?}", args.input))?;

    let output = args.output.as_deref();
    match args.format {
        OutputFormat::Csv => {
            let out_delimiter = io_utils::resolve_delimiter(output, args.delimiter);
            let mut writer = io_utils::open_csv_writer(output, out_delimiter)?;
            write_csv(&converted, &mut writer)?;
        }
        OutputFormat::Json => write_json_lines(&converted, io_utils::open_output(output)?)?,
    }
    info!(
        "Converted {} row(s) across {} column(s)",
        converted.rows.len(),
        converted.columns.len()
    );
    Ok(())
}
