use std::borrow::Cow;

use itertools::Itertools;

use super::CellReader;
use crate::{
    data::Value,
    error::{ConversionError, ConversionFailure},
    types::DataType,
};

pub const DEFAULT_TRUE_VALUES: &[Cow<'static, str>] = &[
    Cow::Borrowed("1"),
    Cow::Borrowed("1.0"),
    Cow::Borrowed("true"),
    Cow::Borrowed("t"),
    Cow::Borrowed("yes"),
    Cow::Borrowed("y"),
];

pub const DEFAULT_FALSE_VALUES: &[Cow<'static, str>] = &[
    Cow::Borrowed("0"),
    Cow::Borrowed("0.0"),
    Cow::Borrowed("false"),
    Cow::Borrowed("f"),
    Cow::Borrowed("no"),
    Cow::Borrowed("n"),
];

/// Converts a value to a boolean without loss of fidelity.
///
/// Numbers succeed only when their canonical text is `0`, `0.0`, `1` or `1.0`.
/// Text (trimmed) and single characters are looked up in the false set, then
/// the true set. Lookup ignores ASCII case unless [`BooleanReader::case_sensitive`]
/// is enabled.
#[derive(Debug, Clone)]
pub struct BooleanReader {
    true_values: Cow<'static, [Cow<'static, str>]>,
    false_values: Cow<'static, [Cow<'static, str>]>,
    case_sensitive: bool,
}

impl Default for BooleanReader {
    fn default() -> Self {
        Self {
            true_values: Cow::Borrowed(DEFAULT_TRUE_VALUES),
            false_values: Cow::Borrowed(DEFAULT_FALSE_VALUES),
            case_sensitive: false,
        }
    }
}

impl BooleanReader {
    pub fn new<T, F>(true_values: T, false_values: F) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            true_values: Cow::Owned(
                true_values
                    .into_iter()
                    .map(|v| Cow::Owned(v.into()))
                    .collect(),
            ),
            false_values: Cow::Owned(
                false_values
                    .into_iter()
                    .map(|v| Cow::Owned(v.into()))
                    .collect(),
            ),
            case_sensitive: false,
        }
    }

    pub fn single(true_value: impl Into<String>, false_value: impl Into<String>) -> Self {
        Self::new([true_value.into()], [false_value.into()])
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn true_values(&self) -> &[Cow<'static, str>] {
        &self.true_values
    }

    pub fn false_values(&self) -> &[Cow<'static, str>] {
        &self.false_values
    }

    fn contains(&self, set: &[Cow<'static, str>], value: &str) -> bool {
        if self.case_sensitive {
            set.iter().any(|candidate| candidate == value)
        } else {
            set.iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(value))
        }
    }

    pub fn string_to_boolean(&self, value: &str) -> Option<bool> {
        if self.contains(&self.false_values, value) {
            Some(false)
        } else if self.contains(&self.true_values, value) {
            Some(true)
        } else {
            None
        }
    }

    fn accepted(&self) -> String {
        self.false_values
            .iter()
            .chain(self.true_values.iter())
            .join(", ")
    }

    fn text_to_boolean(&self, text: &str, source: &Value) -> Result<bool, ConversionError> {
        self.string_to_boolean(text).ok_or_else(|| {
            ConversionError::new(
                source,
                DataType::Boolean,
                ConversionFailure::NotBoolean {
                    accepted: self.accepted(),
                },
            )
        })
    }
}

fn number_to_boolean(value: &Value) -> Result<bool, ConversionError> {
    match value.canonical_text().as_deref() {
        Some("0" | "0.0") => Ok(false),
        Some("1" | "1.0") => Ok(true),
        _ => Err(ConversionError::new(
            value,
            DataType::Boolean,
            ConversionFailure::NotZeroOrOne,
        )),
    }
}

impl CellReader for BooleanReader {
    type Output = bool;

    fn result_type(&self) -> DataType {
        DataType::Boolean
    }

    fn read(&self, value: &Value) -> Result<bool, ConversionError> {
        match value {
            Value::Null => Err(ConversionError::null(DataType::Boolean)),
            Value::Boolean(b) => Ok(*b),
            Value::Byte(_)
            | Value::Short(_)
            | Value::Integer(_)
            | Value::Long(_)
            | Value::Float(_)
            | Value::Double(_) => number_to_boolean(value),
            Value::Text(s) => self.text_to_boolean(s.trim(), value),
            Value::Character(c) => self.text_to_boolean(c.encode_utf8(&mut [0; 4]), value),
            Value::Other(_) => Err(ConversionError::unsupported(value, DataType::Boolean)),
        }
    }
}
