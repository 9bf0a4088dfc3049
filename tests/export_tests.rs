mod common;
use common::{at, hmt, init_store_with_data, record, setup_store};
use horimetro::core::query::{ViewQuery, build_view};
use horimetro::export::{SHEET_NAME, export_spreadsheet, to_csv_bytes, to_json_bytes};
use horimetro::models::FleetFilter;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::io::{Cursor, Read};

/// Read one part of an xlsx package.
fn xlsx_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid xlsx zip");
    let mut part = archive.by_name(name).expect("part present");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("utf-8 xml");
    xml
}

fn row_count(bytes: &[u8]) -> usize {
    xlsx_part(bytes, "xl/worksheets/sheet1.xml")
        .matches("<row ")
        .count()
}

#[test]
fn test_spreadsheet_of_filtered_view_has_header_and_one_row() {
    let store = vec![
        record(at(2024, 1, 10, 0, 0), "Ana", "230", 10.0, 12.0),
        record(at(2024, 1, 11, 0, 0), "Bob", "231", 20.0, 23.0),
    ];
    let view = build_view(
        &store,
        &ViewQuery {
            fleet: FleetFilter::parse("230"),
            range: None,
        },
    );
    assert_eq!(view.summary.count, 1);
    assert_eq!(view.summary.total_hours, 2.0);

    let bytes = export_spreadsheet(&view.records).expect("xlsx buffer");

    assert!(bytes.starts_with(b"PK"));
    assert_eq!(row_count(&bytes), 2);

    let workbook = xlsx_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains(&format!("name=\"{SHEET_NAME}\"")));

    let strings = xlsx_part(&bytes, "xl/sharedStrings.xml");
    assert!(strings.contains("Horimetro Inicial"));
    assert!(strings.contains("Ana"));
    assert!(!strings.contains("Bob"));
}

#[test]
fn test_spreadsheet_of_empty_set_has_header_only() {
    let bytes = export_spreadsheet(&[]).expect("xlsx buffer");
    assert_eq!(row_count(&bytes), 1);
}

#[test]
fn test_csv_and_json_exports_keep_display_order() {
    let store = vec![
        record(at(2024, 1, 10, 0, 0), "Ana", "230", 10.0, 12.0),
        record(at(2024, 1, 12, 0, 0), "Bob", "230", 12.0, 15.5),
    ];
    let view = build_view(&store, &ViewQuery::default());

    let csv = String::from_utf8(to_csv_bytes(&view.records).unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Bob"));
    assert!(lines[2].contains("Ana"));

    let json: serde_json::Value = serde_json::from_slice(&to_json_bytes(&view.records).unwrap()).unwrap();
    assert_eq!(json[0]["Operador"], "Bob");
    assert_eq!(json[0]["Horas Trabalhadas"], 3.5);
    assert_eq!(json[1]["Data"], "2024-01-10 00:00:00");
}

#[test]
fn test_cli_export_xlsx_filtered_by_fleet() {
    let (home, store) = setup_store("cli_export_xlsx");
    init_store_with_data(&home, &store);

    let out = home.join("out.xlsx");
    hmt(&home)
        .args([
            "--store",
            &store,
            "export",
            "--fleet",
            "230",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"))
        .stdout(contains("1 records"));

    let bytes = fs::read(&out).expect("exported file");
    assert_eq!(row_count(&bytes), 2);
}

#[test]
fn test_cli_export_csv_range() {
    let (home, store) = setup_store("cli_export_csv_range");
    init_store_with_data(&home, &store);

    let out = home.join("out.csv");
    hmt(&home)
        .args([
            "--store",
            &store,
            "export",
            "--format",
            "csv",
            "--range",
            "2024-02",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Bruno"));
    assert!(!content.contains("Ana"));
}

#[test]
fn test_cli_export_default_file_name() {
    let (home, store) = setup_store("cli_export_default_name");
    init_store_with_data(&home, &store);

    hmt(&home)
        .current_dir(&home)
        .args(["--store", &store, "export"])
        .assert()
        .success();

    assert!(home.join("registros_horimetro.xlsx").exists());
}

#[test]
fn test_cli_export_invalid_format_fails() {
    let (home, store) = setup_store("cli_export_invalid_format");
    init_store_with_data(&home, &store);

    hmt(&home)
        .args(["--store", &store, "export", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(contains("invalid value 'pdf'"));
}

#[test]
fn test_cli_export_cancel_overwrite_keeps_file() {
    let (home, store) = setup_store("cli_export_cancel");
    init_store_with_data(&home, &store);

    let out = home.join("out.json");
    fs::write(&out, "ORIGINAL").unwrap();

    hmt(&home)
        .args([
            "--store",
            &store,
            "export",
            "--format",
            "json",
            "--file",
            &out.to_string_lossy(),
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "ORIGINAL");
}

#[test]
fn test_cli_export_force_overwrite() {
    let (home, store) = setup_store("cli_export_force");
    init_store_with_data(&home, &store);

    let out = home.join("out.csv");
    fs::write(&out, "OLD_CONTENT").unwrap();

    hmt(&home)
        .args([
            "--store",
            &store,
            "export",
            "--format",
            "csv",
            "--force",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Data,Operador,Frota"));
}

#[test]
fn test_cli_export_nothing_matched_writes_nothing() {
    let (home, store) = setup_store("cli_export_empty");
    init_store_with_data(&home, &store);

    let out = home.join("none.xlsx");
    hmt(&home)
        .args([
            "--store",
            &store,
            "export",
            "--fleet",
            "999",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success()
        .stderr(contains("No records found"));

    assert!(!out.exists());
}

#[test]
fn test_cli_export_nothing_matched_does_not_ask_to_overwrite() {
    let (home, store) = setup_store("cli_export_empty_existing");
    init_store_with_data(&home, &store);

    let out = home.join("existing.xlsx");
    fs::write(&out, "KEEP").unwrap();

    // no answer on stdin: a prompt would cancel the command
    hmt(&home)
        .args([
            "--store",
            &store,
            "export",
            "--fleet",
            "999",
            "--file",
            &out.to_string_lossy(),
        ])
        .write_stdin("")
        .assert()
        .success()
        .stderr(contains("No records found"))
        .stdout(contains("Overwrite").not());

    assert_eq!(fs::read_to_string(&out).unwrap(), "KEEP");
}
