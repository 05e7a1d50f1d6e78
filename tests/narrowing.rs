mod common;

use cell_narrow::{
    ConfigurationError, DataType, NarrowError, Value, calc_narrowest_type,
    cell_readers::CellReaders,
    classify::TypeCheckedValue,
    columns::TableColumns,
    data::OpaqueValue,
    missing::{MISSING_VALUE_DOUBLE, MISSING_VALUE_INTEGER, is_missing_double},
    narrow, narrow_array, narrow_row, narrow_to_narrowest,
    reader::{CellReader, IntegerReader, TokenReader, compose},
};
use common::texts;

#[test]
fn one_past_boolean_range_is_an_integer_column() {
    assert_eq!(
        calc_narrowest_type(&texts(&["1", "1.0", "2"]), false),
        DataType::Integer
    );
}

#[test]
fn tiny_fraction_is_a_double_only() {
    let value = Value::text("1.00000000001");
    let check = TypeCheckedValue::new(&value);
    assert!(!check.can_be_boolean());
    assert!(!check.can_be_integer());
    assert!(check.can_be_double());
}

#[test]
fn long_overflow_pushes_float_column_to_double() {
    let values = [Value::Float(1.0), Value::Long(i64::MAX)];
    assert_eq!(calc_narrowest_type(&values, false), DataType::Double);
}

#[test]
fn empty_text_reads_as_missing_only_when_asked() {
    let empty = Value::text("");
    let lenient = TypeCheckedValue::new(&empty).with_convert_missing(true);
    assert_eq!(lenient.as_integer(), Ok(MISSING_VALUE_INTEGER));
    assert!(is_missing_double(lenient.as_double().expect("double")));

    let strict = TypeCheckedValue::new(&empty);
    assert!(strict.as_integer().is_err());
}

#[test]
fn any_target_returns_value_untouched() {
    assert_eq!(
        narrow(Value::Double(22.0), DataType::Any, false),
        Ok(Value::Double(22.0))
    );
}

#[test]
fn opaque_value_in_mixed_column_yields_any() {
    let values = [
        Value::Integer(1),
        Value::Character('1'),
        Value::text("1"),
        Value::Other(OpaqueValue::new(&())),
    ];
    assert_eq!(calc_narrowest_type(&values, false), DataType::Any);
}

#[test]
fn uniform_opaque_column_keeps_its_kind() {
    let values = [
        Value::Other(OpaqueValue::new(&[1u8, 2])),
        Value::Other(OpaqueValue::new(&[3u8, 4])),
    ];
    let narrowest = calc_narrowest_type(&values, false);
    assert!(matches!(narrowest, DataType::Native(_)));
    assert_eq!(
        narrow_array(values.to_vec(), narrowest, false).expect("identity"),
        values.to_vec()
    );
}

#[test]
fn whole_row_narrows_column_by_column() {
    let row = texts(&["7", "", "x", "no"]);
    let types = [
        DataType::Integer,
        DataType::Double,
        DataType::Character,
        DataType::Boolean,
    ];
    assert_eq!(
        narrow_row(row, &types, true).expect("row"),
        vec![
            Value::Integer(7),
            Value::Double(MISSING_VALUE_DOUBLE),
            Value::Character('x'),
            Value::Boolean(false),
        ]
    );
}

#[test]
fn row_and_type_lengths_must_agree() {
    let err = narrow_row(texts(&["1", "2"]), &[DataType::Integer], false).unwrap_err();
    assert_eq!(
        err,
        NarrowError::Configuration(ConfigurationError::LengthMismatch {
            values: 2,
            targets: 1
        })
    );
    assert!(!err.is_conversion());
}

#[test]
fn narrowing_a_column_reports_the_chosen_type() {
    let (target, values) = narrow_to_narrowest(texts(&["2.5", "3"])).expect("narrow");
    assert_eq!(target, DataType::Double);
    assert_eq!(values, vec![Value::Double(2.5), Value::Double(3.0)]);
}

#[test]
fn conversion_failures_name_value_kind_and_target() {
    let err = narrow(Value::text("abc"), DataType::Double, false).unwrap_err();
    assert!(err.is_conversion());
    let message = err.to_string();
    assert!(message.contains("abc"), "{message}");
    assert!(message.contains("string"), "{message}");
    assert!(message.contains("double"), "{message}");
}

#[test]
fn named_readers_drive_a_table() {
    let header = ["ID".to_string(), "Score".to_string(), "Note".to_string()];
    let readers = CellReaders::default()
        .generate(&["Optional Integer", "double"])
        .expect("readers");
    let table = TableColumns::from_header(&header, Some(&["id", "score"][..]), Some(readers))
        .expect("table");
    assert_eq!(table.column_types(), vec![DataType::Integer, DataType::Double]);
    assert_eq!(
        table.read_row(&texts(&["", "1e3", "ignored"])).expect("row"),
        vec![Value::Integer(MISSING_VALUE_INTEGER), Value::Double(1000.0)]
    );
}

#[test]
fn custom_token_composes_in_front_of_a_converter() {
    let reader = compose(IntegerReader, TokenReader::new("N/A", -1));
    assert_eq!(reader.read(&Value::text("N/A")), Ok(-1));
    assert_eq!(reader.read(&Value::text("12")), Ok(12));
    assert_eq!(reader.result_type(), DataType::Integer);
}
