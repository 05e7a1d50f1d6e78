use super::CellReader;
use crate::{
    data::{Value, format_float32},
    error::{ConversionError, ConversionFailure},
    types::DataType,
};

/// Parses decimal or scientific notation, ignoring surrounding whitespace.
///
/// After an optional sign the text must start with a digit or `.`, so the
/// words `nan`, `inf` and `infinity` are not numerals.
pub(crate) fn parse_numeral(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Widens a 32-bit float through its canonical text, so `1.0001f32` becomes
/// `1.0001` rather than its binary expansion.
fn widen_float(value: f32) -> f64 {
    format_float32(value)
        .parse::<f64>()
        .unwrap_or(f64::from(value))
}

/// Converts a value to a 32-bit integer without loss of fidelity.
///
/// Floating values must have no fractional part and fit in the `i32` range.
/// Text goes through a 64-bit float parse first so that every numeral form
/// (`1.0`, `1e3`) is admitted before the same checks apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerReader;

impl IntegerReader {
    fn from_float(value: f64, source: &Value) -> Result<i32, ConversionError> {
        if value.fract() != 0.0 {
            return Err(ConversionError::new(
                source,
                DataType::Integer,
                ConversionFailure::FractionalPart,
            ));
        }
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(ConversionError::new(
                source,
                DataType::Integer,
                ConversionFailure::OutOfRange,
            ));
        }
        Ok(value as i32)
    }

    fn from_text(text: &str, source: &Value) -> Result<i32, ConversionError> {
        let parsed = parse_numeral(text).ok_or_else(|| {
            ConversionError::new(source, DataType::Integer, ConversionFailure::Malformed)
        })?;
        Self::from_float(parsed, source)
    }
}

impl CellReader for IntegerReader {
    type Output = i32;

    fn result_type(&self) -> DataType {
        DataType::Integer
    }

    fn read(&self, value: &Value) -> Result<i32, ConversionError> {
        match value {
            Value::Null => Err(ConversionError::null(DataType::Integer)),
            Value::Boolean(b) => Ok(i32::from(*b)),
            Value::Byte(i) => Ok(i32::from(*i)),
            Value::Short(i) => Ok(i32::from(*i)),
            Value::Integer(i) => Ok(*i),
            Value::Long(i) => i32::try_from(*i).map_err(|_| {
                ConversionError::new(value, DataType::Integer, ConversionFailure::OutOfRange)
            }),
            Value::Float(f) => Self::from_float(f64::from(*f), value),
            Value::Double(d) => Self::from_float(*d, value),
            Value::Text(s) => Self::from_text(s, value),
            Value::Character(c) => Self::from_text(c.encode_utf8(&mut [0; 4]), value),
            Value::Other(_) => Err(ConversionError::unsupported(value, DataType::Integer)),
        }
    }
}

/// Converts a value to a 64-bit float. Any valid numeral succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleReader;

impl DoubleReader {
    fn from_text(text: &str, source: &Value) -> Result<f64, ConversionError> {
        parse_numeral(text).ok_or_else(|| {
            ConversionError::new(source, DataType::Double, ConversionFailure::Malformed)
        })
    }
}

impl CellReader for DoubleReader {
    type Output = f64;

    fn result_type(&self) -> DataType {
        DataType::Double
    }

    fn read(&self, value: &Value) -> Result<f64, ConversionError> {
        match value {
            Value::Null => Err(ConversionError::null(DataType::Double)),
            Value::Byte(i) => Ok(f64::from(*i)),
            Value::Short(i) => Ok(f64::from(*i)),
            Value::Integer(i) => Ok(f64::from(*i)),
            Value::Long(i) => Ok(*i as f64),
            Value::Float(f) => Ok(widen_float(*f)),
            Value::Double(d) => Ok(*d),
            Value::Text(s) => Self::from_text(s, value),
            Value::Character(c) => Self::from_text(c.encode_utf8(&mut [0; 4]), value),
            Value::Boolean(_) | Value::Other(_) => {
                Err(ConversionError::unsupported(value, DataType::Double))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: impl Into<Value>) -> Result<i32, ConversionError> {
        IntegerReader.read(&value.into())
    }

    fn double(value: impl Into<Value>) -> Result<f64, ConversionError> {
        DoubleReader.read(&value.into())
    }

    #[test]
    fn integer_accepts_whole_numbers_of_any_width() {
        assert_eq!(int(7i8), Ok(7));
        assert_eq!(int(-300i16), Ok(-300));
        assert_eq!(int(i64::from(i32::MAX)), Ok(i32::MAX));
        assert_eq!(int(1.0f32), Ok(1));
        assert_eq!(int(-0.0f64), Ok(0));
        assert_eq!(int(true), Ok(1));
        assert_eq!(int(false), Ok(0));
    }

    #[test]
    fn integer_distinguishes_fraction_from_range() {
        assert_eq!(
            int(1.000_000_000_01f64).unwrap_err().reason,
            ConversionFailure::FractionalPart
        );
        assert_eq!(
            int(1.0001f32).unwrap_err().reason,
            ConversionFailure::FractionalPart
        );
        assert_eq!(int(i64::MAX).unwrap_err().reason, ConversionFailure::OutOfRange);
        assert_eq!(
            int(i64::MAX as f64).unwrap_err().reason,
            ConversionFailure::OutOfRange
        );
        assert_eq!(
            int(f64::NAN).unwrap_err().reason,
            ConversionFailure::FractionalPart
        );
    }

    #[test]
    fn integer_parses_text_through_a_float() {
        assert_eq!(int("1"), Ok(1));
        assert_eq!(int("1.0"), Ok(1));
        assert_eq!(int(" 42 "), Ok(42));
        assert_eq!(int("1e3"), Ok(1000));
        assert_eq!(int('2'), Ok(2));
        assert_eq!(int("1.1").unwrap_err().reason, ConversionFailure::FractionalPart);
        assert_eq!(int("0.01").unwrap_err().reason, ConversionFailure::FractionalPart);
        assert_eq!(
            int("2147483648").unwrap_err().reason,
            ConversionFailure::OutOfRange
        );
        assert_eq!(int("abc").unwrap_err().reason, ConversionFailure::Malformed);
        assert_eq!(int("").unwrap_err().reason, ConversionFailure::Malformed);
    }

    #[test]
    fn integer_rejects_null() {
        let err = int(Value::Null).unwrap_err();
        assert_eq!(err.reason, ConversionFailure::Null);
        assert_eq!(err.target, DataType::Integer);
    }

    #[test]
    fn double_accepts_every_numeral() {
        assert_eq!(double(1.000_000_000_01f64), Ok(1.000_000_000_01));
        assert_eq!(double(1.0001f32), Ok(1.0001));
        assert_eq!(double(i64::MAX), Ok(9.223_372_036_854_776e18));
        assert_eq!(double("1.1"), Ok(1.1));
        assert_eq!(double("-2.5e-3"), Ok(-0.0025));
        assert_eq!(double('7'), Ok(7.0));
    }

    #[test]
    fn double_rejects_booleans_and_malformed_text() {
        assert_eq!(
            double(true).unwrap_err().reason,
            ConversionFailure::UnsupportedKind
        );
        assert_eq!(double("1,5").unwrap_err().reason, ConversionFailure::Malformed);
        assert_eq!(double(Value::Null).unwrap_err().reason, ConversionFailure::Null);
    }

    #[test]
    fn special_float_words_are_malformed() {
        for word in ["nan", "NaN", "inf", "INF", "-inf", "+Infinity", "Infinity", "infinity"] {
            assert_eq!(double(word).unwrap_err().reason, ConversionFailure::Malformed, "{word}");
            assert_eq!(int(word).unwrap_err().reason, ConversionFailure::Malformed, "{word}");
        }
    }

    #[test]
    fn signed_and_bare_fraction_numerals_parse() {
        assert_eq!(double("+.5"), Ok(0.5));
        assert_eq!(double("-.25"), Ok(-0.25));
        assert_eq!(double("5."), Ok(5.0));
        assert_eq!(double(".").unwrap_err().reason, ConversionFailure::Malformed);
        assert_eq!(double("-").unwrap_err().reason, ConversionFailure::Malformed);
    }
}
