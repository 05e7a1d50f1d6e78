//! Target types a value or a whole column can be narrowed to.
//!
//! Narrowness forms two chains, `Boolean ⊂ Integer ⊂ Double` and
//! `Character ⊂ Text`, both under the universal `Any`. `Native` carries an
//! exact runtime kind and only appears as the uniform-kind fallback of column
//! inference; values can be narrowed to it only when they already have it.

use std::{fmt, str::FromStr};

use anyhow::anyhow;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::data::ValueKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Integer,
    Double,
    Character,
    Text,
    Native(ValueKind),
    Any,
}

impl DataType {
    /// The target type whose values have exactly this runtime kind.
    pub fn of_kind(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Boolean => DataType::Boolean,
            ValueKind::Integer => DataType::Integer,
            ValueKind::Double => DataType::Double,
            ValueKind::Character => DataType::Character,
            ValueKind::Text => DataType::Text,
            other => DataType::Native(other),
        }
    }

    /// True when a value of `kind` already is of this type.
    pub fn matches_kind(&self, kind: ValueKind) -> bool {
        match self {
            DataType::Boolean => kind == ValueKind::Boolean,
            DataType::Integer => kind == ValueKind::Integer,
            DataType::Double => kind == ValueKind::Double,
            DataType::Character => kind == ValueKind::Character,
            DataType::Text => kind == ValueKind::Text,
            DataType::Native(native) => *native == kind,
            DataType::Any => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::Double => "double",
            DataType::Character => "character",
            DataType::Text => "string",
            DataType::Native(kind) => kind.as_str(),
            DataType::Any => "any",
        }
    }

    pub fn variants() -> &'static [&'static str] {
        &["boolean", "integer", "double", "character", "string", "any"]
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "boolean" | "bool" => Ok(DataType::Boolean),
            "integer" | "int" => Ok(DataType::Integer),
            "double" | "float" => Ok(DataType::Double),
            "character" | "char" => Ok(DataType::Character),
            "string" | "text" => Ok(DataType::Text),
            "any" | "object" => Ok(DataType::Any),
            _ => Err(anyhow!(
                "Unknown data type '{value}'. Supported types: {}",
                DataType::variants().join(", ")
            )),
        }
    }
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        DataType::from_str(&token).map_err(|err| de::Error::custom(err.to_string()))
    }
}
