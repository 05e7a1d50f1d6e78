//! Narrowest-type inference over a column and conversion of whole sequences.
//!
//! [`TypeCandidate`] is the scan accumulator: five possibility flags that start
//! out true and are switched off the first time a value's probe fails, plus a
//! record of whether every value shares one exact runtime kind. The decision
//! takes the narrowest surviving type in the fixed order Boolean, Integer,
//! Double, Character, Text, then the common kind, then `Any`.
//!
//! Everything here is pure: the same input always narrows to the same type and
//! the same converted values.

use crate::{
    classify::TypeCheckedValue,
    data::{Value, ValueKind},
    error::{ConfigurationError, NarrowError},
    types::DataType,
};

#[derive(Debug, Clone)]
pub struct TypeCandidate {
    allow_missing: bool,
    boolean_possible: bool,
    integer_possible: bool,
    double_possible: bool,
    char_possible: bool,
    string_possible: bool,
    first_kind: Option<ValueKind>,
    all_same_kind: bool,
}

impl TypeCandidate {
    pub fn new(allow_missing: bool) -> Self {
        Self {
            allow_missing,
            boolean_possible: true,
            integer_possible: true,
            double_possible: true,
            char_possible: true,
            string_possible: true,
            first_kind: None,
            all_same_kind: true,
        }
    }

    pub fn update(&mut self, value: &Value) {
        let check = TypeCheckedValue::new(value).with_convert_missing(self.allow_missing);

        if self.boolean_possible {
            self.boolean_possible = check.can_be_boolean();
        }

        if self.double_possible {
            self.double_possible = check.can_be_double();
            // Integer is never wider than Double
            if !self.double_possible {
                self.integer_possible = false;
            } else if self.integer_possible {
                self.integer_possible = check.can_be_integer();
            }
        }

        if self.string_possible {
            self.string_possible = check.can_be_string();
            if !self.string_possible {
                self.char_possible = false;
            } else if self.char_possible {
                self.char_possible = check.can_be_char();
            }
        }

        let kind = value.kind();
        match self.first_kind {
            None => self.first_kind = Some(kind),
            Some(first) => {
                if self.all_same_kind {
                    self.all_same_kind = first == kind;
                }
            }
        }
    }

    /// Narrowest type that holds every value seen so far; `Any` before any value.
    pub fn decide(&self) -> DataType {
        let Some(first_kind) = self.first_kind else {
            return DataType::Any;
        };
        if self.boolean_possible {
            DataType::Boolean
        } else if self.integer_possible {
            DataType::Integer
        } else if self.double_possible {
            DataType::Double
        } else if self.char_possible {
            DataType::Character
        } else if self.string_possible {
            DataType::Text
        } else if self.all_same_kind {
            DataType::of_kind(first_kind)
        } else {
            DataType::Any
        }
    }
}

/// Narrowest type that can hold every value in `values` without loss.
///
/// An empty column yields [`DataType::Any`].
pub fn calc_narrowest_type(values: &[Value], allow_missing: bool) -> DataType {
    let mut candidate = TypeCandidate::new(allow_missing);
    for value in values {
        candidate.update(value);
    }
    candidate.decide()
}

/// Converts one value to `target`.
///
/// `Null` stays `Null`. A value that already has the target's kind, or any
/// value with target `Any`, is returned untouched. A `Native` target the value
/// does not already have is a configuration error.
pub fn narrow(value: Value, target: DataType, convert_missing: bool) -> Result<Value, NarrowError> {
    if value.is_null() || target.matches_kind(value.kind()) {
        return Ok(value);
    }

    let check = TypeCheckedValue::new(&value).with_convert_missing(convert_missing);
    let narrowed = match target {
        DataType::Boolean => Value::Boolean(check.as_boolean()?),
        DataType::Integer => Value::Integer(check.as_integer()?),
        DataType::Double => Value::Double(check.as_double()?),
        DataType::Character => Value::Character(check.as_char()?),
        DataType::Text => Value::Text(check.as_string()?),
        DataType::Native(_) | DataType::Any => {
            return Err(ConfigurationError::UnsupportedTarget {
                value: value.describe(),
                kind: value.kind(),
                target,
            }
            .into());
        }
    };
    Ok(narrowed)
}

/// Narrows every value to the same `target`.
pub fn narrow_array(
    values: Vec<Value>,
    target: DataType,
    convert_missing: bool,
) -> Result<Vec<Value>, NarrowError> {
    values
        .into_iter()
        .map(|value| narrow(value, target, convert_missing))
        .collect()
}

/// Narrows each value to the type at the same position in `targets`.
pub fn narrow_row(
    values: Vec<Value>,
    targets: &[DataType],
    convert_missing: bool,
) -> Result<Vec<Value>, NarrowError> {
    if values.len() != targets.len() {
        return Err(ConfigurationError::LengthMismatch {
            values: values.len(),
            targets: targets.len(),
        }
        .into());
    }
    values
        .into_iter()
        .zip(targets)
        .map(|(value, target)| narrow(value, *target, convert_missing))
        .collect()
}

/// Narrows `values` to their own narrowest type, missing values not allowed.
pub fn narrow_to_narrowest(values: Vec<Value>) -> Result<(DataType, Vec<Value>), NarrowError> {
    let target = calc_narrowest_type(&values, false);
    let narrowed = narrow_array(values, target, false)?;
    Ok((target, narrowed))
}
