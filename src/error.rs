use thiserror::Error;

use crate::{
    data::{Value, ValueKind},
    types::DataType,
};

/// Why a value could not be represented in the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionFailure {
    #[error("null cannot be converted")]
    Null,
    #[error("values of this kind cannot be converted")]
    UnsupportedKind,
    #[error("not a valid number")]
    Malformed,
    #[error("has a fractional part")]
    FractionalPart,
    #[error("too large to be a 32-bit integer")]
    OutOfRange,
    #[error("number is not 0 or 1")]
    NotZeroOrOne,
    #[error("not a boolean value (ie: {accepted})")]
    NotBoolean { accepted: String },
    #[error("not exactly one character")]
    NotSingleCharacter,
    #[error("does not match the date format \"{format}\"")]
    NotDate { format: String },
}

/// A specific value cannot be represented in the requested type without loss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {kind} [{value}] to {target}: {reason}")]
pub struct ConversionError {
    pub value: String,
    pub kind: ValueKind,
    pub target: DataType,
    pub reason: ConversionFailure,
}

impl ConversionError {
    pub fn new(value: &Value, target: DataType, reason: ConversionFailure) -> Self {
        Self {
            value: value.describe(),
            kind: value.kind(),
            target,
            reason,
        }
    }

    pub fn null(target: DataType) -> Self {
        Self::new(&Value::Null, target, ConversionFailure::Null)
    }

    pub fn unsupported(value: &Value, target: DataType) -> Self {
        Self::new(value, target, ConversionFailure::UnsupportedKind)
    }
}

/// A setup mistake rather than a data problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("length of values ({values}) does not match length of target types ({targets})")]
    LengthMismatch { values: usize, targets: usize },
    #[error("{kind} [{value}] cannot be narrowed to type {target}")]
    UnsupportedTarget {
        value: String,
        kind: ValueKind,
        target: DataType,
    },
    #[error("no default reader called \"{0}\"")]
    UnknownReader(String),
    #[error("the number of cell readers ({readers}) does not match the number of columns ({columns})")]
    ReaderCountMismatch { readers: usize, columns: usize },
    #[error("header is empty")]
    EmptyHeader,
    #[error("header row, column {0} is empty")]
    BlankHeading(usize),
    #[error("does not contain a column with the header \"{0}\"")]
    MissingColumn(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrowError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl NarrowError {
    pub fn is_conversion(&self) -> bool {
        matches!(self, NarrowError::Conversion(_))
    }
}

/// A conversion failure tied to the column it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column '{column}': {source}")]
pub struct CellError {
    pub column: String,
    pub source: ConversionError,
}
