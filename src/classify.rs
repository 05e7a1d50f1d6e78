//! Per-value feasibility probes.
//!
//! [`TypeCheckedValue`] answers "can this value be X?" by running the very
//! converter that `as_x` runs and looking at the result, so a probe and the
//! matching conversion can never disagree.

use crate::{
    data::Value,
    error::ConversionError,
    reader::{
        BooleanReader, CellReader, CharacterReader, DoubleReader, IntegerReader, StringReader,
        optional_double, optional_integer,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct TypeCheckedValue<'a> {
    value: &'a Value,
    convert_missing: bool,
}

impl<'a> TypeCheckedValue<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            convert_missing: false,
        }
    }

    /// When set, `Null` and empty text read as the Integer/Double missing
    /// sentinels instead of failing.
    pub fn with_convert_missing(mut self, convert_missing: bool) -> Self {
        self.convert_missing = convert_missing;
        self
    }

    pub fn can_be_boolean(&self) -> bool {
        self.as_boolean().is_ok()
    }

    pub fn can_be_integer(&self) -> bool {
        self.as_integer().is_ok()
    }

    pub fn can_be_double(&self) -> bool {
        self.as_double().is_ok()
    }

    pub fn can_be_char(&self) -> bool {
        self.as_char().is_ok()
    }

    pub fn can_be_string(&self) -> bool {
        self.as_string().is_ok()
    }

    pub fn as_boolean(&self) -> Result<bool, ConversionError> {
        BooleanReader::default().read(self.value)
    }

    pub fn as_integer(&self) -> Result<i32, ConversionError> {
        if self.convert_missing {
            optional_integer().read(self.value)
        } else {
            IntegerReader.read(self.value)
        }
    }

    pub fn as_double(&self) -> Result<f64, ConversionError> {
        if self.convert_missing {
            optional_double().read(self.value)
        } else {
            DoubleReader.read(self.value)
        }
    }

    pub fn as_char(&self) -> Result<char, ConversionError> {
        CharacterReader.read(self.value)
    }

    pub fn as_string(&self) -> Result<String, ConversionError> {
        StringReader.read(self.value)
    }
}
