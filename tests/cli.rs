mod common;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use cell_narrow::{DataType, probe::ColumnTypes};
use common::TestWorkspace;
use encoding_rs::WINDOWS_1252;
use predicates::prelude::*;

const SAMPLE: &str = "id,price,active,grade,comment\n\
                      1,9.5,yes,A,first\n\
                      2,,no,B,second\n\
                      3,12,Y,C,third\n";

#[test]
fn probe_prints_and_saves_column_types() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("sample.csv", SAMPLE);
    let output = workspace.join("types.json");

    cargo_bin_cmd!("cell-narrow")
        .args([
            "probe",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("grade"))
        .stdout(predicate::str::contains("character"));

    let saved: ColumnTypes =
        serde_json::from_str(&fs::read_to_string(&output).expect("read types")).expect("json");
    assert_eq!(saved.rows_scanned, 3);
    assert_eq!(
        saved.data_types(),
        vec![
            DataType::Integer,
            DataType::Text,
            DataType::Boolean,
            DataType::Character,
            DataType::Text,
        ]
    );
}

#[test]
fn probe_with_missing_values_sees_sparse_doubles() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("sample.csv", SAMPLE);
    let output = workspace.join("types.json");

    cargo_bin_cmd!("cell-narrow")
        .args([
            "probe",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--allow-missing",
            "-C",
            "price",
        ])
        .assert()
        .success();

    let saved: ColumnTypes =
        serde_json::from_str(&fs::read_to_string(&output).expect("read types")).expect("json");
    assert_eq!(saved.data_types(), vec![DataType::Double]);
}

#[test]
fn probe_honors_input_encoding_and_tsv_extension() {
    let workspace = TestWorkspace::new();
    let (encoded, _, _) = WINDOWS_1252.encode("name\tsign\nCaf\u{e9}\t\u{e9}\n");
    let input = workspace.write("encoded.tsv", encoded.into_owned());

    cargo_bin_cmd!("cell-narrow")
        .args([
            "probe",
            "-i",
            input.to_str().unwrap(),
            "--input-encoding",
            "windows-1252",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sign"))
        .stdout(predicate::str::contains("character"));
}

#[test]
fn convert_with_named_readers_writes_csv() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("sample.csv", SAMPLE);
    let output = workspace.join("out.csv");

    cargo_bin_cmd!("cell-narrow")
        .args([
            "convert",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-C",
            "id,price,active",
            "--types",
            "integer,optional double,boolean",
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written, "id,price,active\n1,9.5,true\n2,,false\n3,12.0,true\n");
}

#[test]
fn convert_infers_types_and_writes_json_lines() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("sample.csv", SAMPLE);

    cargo_bin_cmd!("cell-narrow")
        .args([
            "convert",
            "-i",
            input.to_str().unwrap(),
            "--allow-missing",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{\"id\":2,\"price\":null,\"active\":false,\"grade\":\"B\",\"comment\":\"second\"}",
        ));
}

#[test]
fn convert_accepts_custom_boolean_text() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("flags.csv", "flag\nON\noff\n");

    cargo_bin_cmd!("cell-narrow")
        .args([
            "convert",
            "-i",
            input.to_str().unwrap(),
            "--types",
            "boolean",
            "--true-values",
            "on",
            "--false-values",
            "off",
        ])
        .assert()
        .success()
        .stdout("flag\ntrue\nfalse\n");

    cargo_bin_cmd!("cell-narrow")
        .args([
            "convert",
            "-i",
            input.to_str().unwrap(),
            "--types",
            "boolean",
            "--true-values",
            "on",
            "--false-values",
            "off",
            "--case-sensitive-booleans",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1"));
}

#[test]
fn convert_rejects_unknown_reader_name() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("sample.csv", SAMPLE);

    cargo_bin_cmd!("cell-narrow")
        .args([
            "convert",
            "-i",
            input.to_str().unwrap(),
            "-C",
            "id",
            "--types",
            "decimal",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no default reader called \"decimal\""));
}

#[test]
fn convert_reports_failing_row_and_column() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("sample.csv", SAMPLE);

    cargo_bin_cmd!("cell-narrow")
        .args([
            "convert",
            "-i",
            input.to_str().unwrap(),
            "-C",
            "comment",
            "--types",
            "integer",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1"))
        .stderr(predicate::str::contains("column 'comment'"));
}

#[test]
fn convert_reads_stdin() {
    cargo_bin_cmd!("cell-narrow")
        .args(["convert", "-i", "-"])
        .write_stdin("n,c\n1,a\n2,b\n")
        .assert()
        .success()
        .stdout("n,c\n1,a\n2,b\n");
}

#[test]
fn readers_lists_default_names_and_types() {
    cargo_bin_cmd!("cell-narrow")
        .arg("readers")
        .assert()
        .success()
        .stdout(predicate::str::contains("optional integer"))
        .stdout(predicate::str::contains("optional double"))
        .stdout(predicate::str::contains("character"));
}
