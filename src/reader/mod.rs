//! Fidelity converters and the composable reader pipeline.
//!
//! Every converter implements [`CellReader`]: it takes a borrowed [`Value`] and
//! either produces its target type or reports a [`ConversionError`]. No
//! converter approximates; anything that would lose information fails.
//!
//! [`ValueReader`] is the type-erased face of a reader (output re-wrapped as a
//! [`Value`]) so that readers of different output types can sit side by side in
//! a column list or in the [`crate::cell_readers::CellReaders`] table.

mod boolean;
mod date;
mod numeric;
mod pipeline;
mod text;

use std::fmt;

use crate::{data::Value, error::ConversionError, types::DataType};

pub use boolean::{BooleanReader, DEFAULT_FALSE_VALUES, DEFAULT_TRUE_VALUES};
pub use date::{DEFAULT_DATE_FORMAT, DateReader};
pub use numeric::{DoubleReader, IntegerReader};
pub use pipeline::{
    Composed, IdentityReader, MissingValueReader, OptionalDoubleReader, OptionalIntegerReader,
    TokenReader, compose, optional_double, optional_integer,
};
pub use text::{CharacterReader, StringReader};

pub trait CellReader: fmt::Debug + Send + Sync {
    type Output: Into<Value>;

    /// Type of value this reader produces.
    fn result_type(&self) -> DataType;

    fn read(&self, value: &Value) -> Result<Self::Output, ConversionError>;
}

pub trait ValueReader: fmt::Debug + Send + Sync {
    fn value_type(&self) -> DataType;

    fn read_value(&self, value: &Value) -> Result<Value, ConversionError>;
}

impl<R: CellReader> ValueReader for R {
    fn value_type(&self) -> DataType {
        self.result_type()
    }

    fn read_value(&self, value: &Value) -> Result<Value, ConversionError> {
        self.read(value).map(Into::into)
    }
}
