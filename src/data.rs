//! Tagged cell values as they arrive from a row source.
//!
//! [`Value`] is the closed set of source kinds a spreadsheet or delimited-text
//! parser can hand over: null, booleans, fixed-width signed integers, 32/64-bit
//! floats, single characters, text, and an opaque escape kind for anything
//! else. [`ValueKind`] names the exact runtime kind of a value and is what the
//! narrowing engine compares when it checks whether a column is uniform.
//!
//! Floating values format and compare exactly: [`Value::canonical_text`] uses a
//! fixed locale-independent form (`1.0`, `1e20`) and equality is by bit pattern,
//! so the missing-value sentinels compare equal to themselves.

use std::{borrow::Cow, fmt};

use serde::{Serialize, Serializer};

use crate::missing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Character,
    Text,
    Other(&'static str),
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Byte => "byte",
            ValueKind::Short => "short",
            ValueKind::Integer => "integer",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Character => "character",
            ValueKind::Text => "string",
            ValueKind::Other(type_name) => *type_name,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value of a type the engine does not understand.
///
/// Only its type name and debug rendering are kept; it can never be converted
/// to anything but itself or `Any`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueValue {
    type_name: &'static str,
    repr: String,
}

impl OpaqueValue {
    pub fn new<T: fmt::Debug + ?Sized + 'static>(value: &T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            repr: format!("{value:?}"),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn repr(&self) -> &str {
        &self.repr
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Character(char),
    Text(String),
    Other(OpaqueValue),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Byte(_) => ValueKind::Byte,
            Value::Short(_) => ValueKind::Short,
            Value::Integer(_) => ValueKind::Integer,
            Value::Long(_) => ValueKind::Long,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::Character(_) => ValueKind::Character,
            Value::Text(_) => ValueKind::Text,
            Value::Other(opaque) => ValueKind::Other(opaque.type_name()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for `Null`, empty text, and the Integer/Double missing sentinels.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            Value::Integer(i) => missing::is_missing_integer(*i),
            Value::Double(d) => missing::is_missing_double(*d),
            _ => false,
        }
    }

    /// Locale-independent textual form. `None` for `Null` and opaque values.
    pub fn canonical_text(&self) -> Option<Cow<'_, str>> {
        let text = match self {
            Value::Null | Value::Other(_) => return None,
            Value::Boolean(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::Byte(i) => Cow::Owned(i.to_string()),
            Value::Short(i) => Cow::Owned(i.to_string()),
            Value::Integer(i) => Cow::Owned(i.to_string()),
            Value::Long(i) => Cow::Owned(i.to_string()),
            Value::Float(f) => Cow::Owned(format_float32(*f)),
            Value::Double(d) => Cow::Owned(format_float64(*d)),
            Value::Character(c) => Cow::Owned(c.to_string()),
            Value::Text(s) => Cow::Borrowed(s.as_str()),
        };
        Some(text)
    }

    /// Rendering used in diagnostics: canonical text, `null`, or the opaque repr.
    pub fn describe(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Other(opaque) => opaque.repr().to_string(),
            other => other
                .canonical_text()
                .map(Cow::into_owned)
                .unwrap_or_default(),
        }
    }

    /// Cell text for delimited output; missing values render as an empty cell.
    pub fn as_cell(&self) -> String {
        if self.is_missing() {
            return String::new();
        }
        self.describe()
    }
}

/// Shortest round-trip form that always carries a fraction or an exponent.
pub fn format_float64(value: f64) -> String {
    format!("{value:?}")
}

pub fn format_float32(value: f32) -> String {
    format!("{value:?}")
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Character(a), Value::Character(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_missing() && !matches!(self, Value::Text(_)) {
            return serializer.serialize_none();
        }
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Byte(i) => serializer.serialize_i8(*i),
            Value::Short(i) => serializer.serialize_i16(*i),
            Value::Integer(i) => serializer.serialize_i32(*i),
            Value::Long(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f32(*f),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::Character(c) => serializer.serialize_char(*c),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Other(opaque) => serializer.serialize_str(opaque.repr()),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Integer,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Character,
    String => Text,
    OpaqueValue => Other,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
