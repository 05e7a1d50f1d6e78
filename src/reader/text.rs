use std::borrow::Cow;

use super::CellReader;
use crate::{
    data::Value,
    error::{ConversionError, ConversionFailure},
    types::DataType,
};

/// Accepts a character, or text that is exactly one character long.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterReader;

impl CellReader for CharacterReader {
    type Output = char;

    fn result_type(&self) -> DataType {
        DataType::Character
    }

    fn read(&self, value: &Value) -> Result<char, ConversionError> {
        match value {
            Value::Null => Err(ConversionError::null(DataType::Character)),
            Value::Character(c) => Ok(*c),
            Value::Text(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(ConversionError::new(
                        value,
                        DataType::Character,
                        ConversionFailure::NotSingleCharacter,
                    )),
                }
            }
            _ => Err(ConversionError::unsupported(value, DataType::Character)),
        }
    }
}

/// Renders booleans, numbers and characters in canonical text; text passes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringReader;

impl CellReader for StringReader {
    type Output = String;

    fn result_type(&self) -> DataType {
        DataType::Text
    }

    fn read(&self, value: &Value) -> Result<String, ConversionError> {
        match value {
            Value::Null => Err(ConversionError::null(DataType::Text)),
            other => other
                .canonical_text()
                .map(Cow::into_owned)
                .ok_or_else(|| ConversionError::unsupported(value, DataType::Text)),
        }
    }
}
