//! Readers that rewrite a value before a concrete converter sees it, and the
//! composition that chains them.

use super::{CellReader, DoubleReader, IntegerReader};
use crate::{
    data::Value,
    error::ConversionError,
    missing::{MISSING_VALUE_DOUBLE, MISSING_VALUE_INTEGER},
    types::DataType,
};

/// Returns the value read without any processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityReader;

impl CellReader for IdentityReader {
    type Output = Value;

    fn result_type(&self) -> DataType {
        DataType::Any
    }

    fn read(&self, value: &Value) -> Result<Value, ConversionError> {
        Ok(value.clone())
    }
}

/// Returns `replacement` when the input equals `token`, else the input.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenReader {
    token: Value,
    replacement: Value,
}

impl TokenReader {
    pub fn new(token: impl Into<Value>, replacement: impl Into<Value>) -> Self {
        Self {
            token: token.into(),
            replacement: replacement.into(),
        }
    }

    pub fn substitute(&self, value: &Value) -> Value {
        if *value == self.token {
            self.replacement.clone()
        } else {
            value.clone()
        }
    }
}

impl CellReader for TokenReader {
    type Output = Value;

    fn result_type(&self) -> DataType {
        DataType::Any
    }

    fn read(&self, value: &Value) -> Result<Value, ConversionError> {
        Ok(self.substitute(value))
    }
}

/// Returns `replacement` for missing input (`Null` or empty text).
#[derive(Debug, Clone, PartialEq)]
pub struct MissingValueReader {
    replacement: Value,
}

impl MissingValueReader {
    pub fn new(replacement: impl Into<Value>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    pub fn substitute(&self, value: &Value) -> Value {
        match value {
            Value::Null => self.replacement.clone(),
            Value::Text(s) if s.is_empty() => self.replacement.clone(),
            other => other.clone(),
        }
    }
}

impl CellReader for MissingValueReader {
    type Output = Value;

    fn result_type(&self) -> DataType {
        DataType::Any
    }

    fn read(&self, value: &Value) -> Result<Value, ConversionError> {
        Ok(self.substitute(value))
    }
}

/// `h(x) = f(g(x))`, reporting `f`'s result type.
#[derive(Debug, Clone)]
pub struct Composed<F, G> {
    f: F,
    g: G,
}

pub fn compose<F, G>(f: F, g: G) -> Composed<F, G>
where
    F: CellReader,
    G: CellReader<Output = Value>,
{
    Composed { f, g }
}

impl<F, G> CellReader for Composed<F, G>
where
    F: CellReader,
    G: CellReader<Output = Value>,
{
    type Output = F::Output;

    fn result_type(&self) -> DataType {
        self.f.result_type()
    }

    fn read(&self, value: &Value) -> Result<F::Output, ConversionError> {
        let intermediate = self.g.read(value)?;
        self.f.read(&intermediate)
    }
}

pub type OptionalIntegerReader = Composed<IntegerReader, MissingValueReader>;

pub type OptionalDoubleReader = Composed<DoubleReader, MissingValueReader>;

/// Integer reader that yields [`MISSING_VALUE_INTEGER`] for missing input.
pub fn optional_integer() -> OptionalIntegerReader {
    compose(
        IntegerReader,
        MissingValueReader::new(Value::Integer(MISSING_VALUE_INTEGER)),
    )
}

/// Double reader that yields [`MISSING_VALUE_DOUBLE`] for missing input.
pub fn optional_double() -> OptionalDoubleReader {
    compose(
        DoubleReader,
        MissingValueReader::new(Value::Double(MISSING_VALUE_DOUBLE)),
    )
}
