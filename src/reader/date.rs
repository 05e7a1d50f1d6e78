use std::borrow::Cow;

use chrono::NaiveDate;

use super::CellReader;
use crate::{
    data::{OpaqueValue, Value, ValueKind},
    error::{ConversionError, ConversionFailure},
    types::DataType,
};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses text into a calendar date with a fixed `chrono` format.
///
/// Only text is accepted. Dates are opaque to the narrowing engine, so the
/// erased output is an [`OpaqueValue`] of kind `NaiveDate`.
#[derive(Debug, Clone)]
pub struct DateReader {
    format: Cow<'static, str>,
}

impl Default for DateReader {
    fn default() -> Self {
        Self {
            format: Cow::Borrowed(DEFAULT_DATE_FORMAT),
        }
    }
}

impl DateReader {
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Cow::Owned(format.into()),
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl CellReader for DateReader {
    type Output = NaiveDate;

    fn result_type(&self) -> DataType {
        DataType::Native(ValueKind::Other(std::any::type_name::<NaiveDate>()))
    }

    fn read(&self, value: &Value) -> Result<NaiveDate, ConversionError> {
        let target = self.result_type();
        match value {
            Value::Null => Err(ConversionError::null(target)),
            Value::Text(text) => NaiveDate::parse_from_str(text, &self.format).map_err(|_| {
                ConversionError::new(
                    value,
                    target,
                    ConversionFailure::NotDate {
                        format: self.format.to_string(),
                    },
                )
            }),
            _ => Err(ConversionError::unsupported(value, target)),
        }
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Other(OpaqueValue::new(&value))
    }
}
