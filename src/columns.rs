//! Column bookkeeping for a table read through the engine.
//!
//! [`TableColumns`] validates a header row, resolves which columns to read,
//! assigns each one a reader (the identity reader unless told otherwise), and
//! converts raw rows into typed rows.

use std::sync::Arc;

use crate::{
    cell_readers::SharedReader,
    data::Value,
    error::{CellError, ConfigurationError},
    reader::IdentityReader,
    types::DataType,
};

#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    index: usize,
    reader: SharedReader,
}

impl Column {
    /// A column read with the identity reader.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self::with_reader(name, index, Arc::new(IdentityReader))
    }

    pub fn with_reader(name: impl Into<String>, index: usize, reader: SharedReader) -> Self {
        Self {
            name: name.into(),
            index,
            reader,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based position of the column in the source header.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reader(&self) -> &SharedReader {
        &self.reader
    }

    pub fn set_reader(&mut self, reader: SharedReader) {
        self.reader = reader;
    }

    pub fn data_type(&self) -> DataType {
        self.reader.value_type()
    }

    /// Converts this column's cell; a row too short to reach it reads as `Null`.
    pub fn read_cell(&self, row: &[Value]) -> Result<Value, CellError> {
        let read = match row.get(self.index) {
            Some(raw) => self.reader.read_value(raw),
            None => self.reader.read_value(&Value::Null),
        };
        read.map_err(|source| CellError {
            column: self.name.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TableColumns {
    columns: Vec<Column>,
}

impl TableColumns {
    /// Resolves the columns to read from `header`.
    ///
    /// With `columns_to_read` of `None` every header column is read in order;
    /// otherwise each requested name is looked up (ignoring case). When
    /// `readers` is given it must hold one reader per column read.
    pub fn from_header<S: AsRef<str>>(
        header: &[String],
        columns_to_read: Option<&[S]>,
        readers: Option<Vec<SharedReader>>,
    ) -> Result<Self, ConfigurationError> {
        check_header(header)?;

        let mut columns = match columns_to_read {
            None => header
                .iter()
                .enumerate()
                .map(|(idx, name)| Column::new(name.clone(), idx))
                .collect::<Vec<_>>(),
            Some(requested) => requested
                .iter()
                .map(|name| {
                    let name = name.as_ref();
                    header
                        .iter()
                        .position(|heading| heading.eq_ignore_ascii_case(name))
                        .map(|idx| Column::new(name, idx))
                        .ok_or_else(|| ConfigurationError::MissingColumn(name.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        if let Some(readers) = readers {
            if readers.len() != columns.len() {
                return Err(ConfigurationError::ReaderCountMismatch {
                    readers: readers.len(),
                    columns: columns.len(),
                });
            }
            for (column, reader) in columns.iter_mut().zip(readers) {
                column.set_reader(reader);
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_types(&self) -> Vec<DataType> {
        self.columns.iter().map(Column::data_type).collect()
    }

    pub fn columns_read(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Picks out the cells of the columns read, without conversion.
    pub fn select(&self, row: &[Value]) -> Vec<Value> {
        self.columns
            .iter()
            .map(|column| row.get(column.index()).cloned().unwrap_or(Value::Null))
            .collect()
    }

    pub fn read_row(&self, row: &[Value]) -> Result<Vec<Value>, CellError> {
        self.columns
            .iter()
            .map(|column| column.read_cell(row))
            .collect()
    }
}

fn check_header(header: &[String]) -> Result<(), ConfigurationError> {
    if header.is_empty() {
        return Err(ConfigurationError::EmptyHeader);
    }
    if let Some(idx) = header.iter().position(|heading| heading.is_empty()) {
        return Err(ConfigurationError::BlankHeading(idx + 1));
    }
    Ok(())
}
