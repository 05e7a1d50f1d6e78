//! Reserved sentinels that stand for "no data" once a column is typed.
//!
//! Consumers compare by exact bit pattern, so the Double sentinel is a specific
//! NaN payload rather than any NaN.

pub const MISSING_VALUE_BYTE: i8 = i8::MIN;

pub const MISSING_VALUE_INTEGER: i32 = i32::MIN;

pub const MISSING_VALUE_DOUBLE_BITS: u64 = 0x7ff0_0000_0000_07a2;

pub const MISSING_VALUE_DOUBLE: f64 = f64::from_bits(MISSING_VALUE_DOUBLE_BITS);

pub fn is_missing_integer(value: i32) -> bool {
    value == MISSING_VALUE_INTEGER
}

pub fn is_missing_double(value: f64) -> bool {
    value.to_bits() == MISSING_VALUE_DOUBLE_BITS
}
