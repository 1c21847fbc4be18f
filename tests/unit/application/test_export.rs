use serde_json::json;
use prettytable::csv::Reader;
use skills_client::application::export::{
    cell_text, export_records_csv, record_columns, write_records_csv,
};

fn sample_records() -> Vec<serde_json::Value> {
    vec![
        json!({"id": "KS1", "name": "SQL", "type": {"id": "ST1", "name": "Hard Skill"}}),
        json!({"id": "KS2", "name": "Teamwork", "infoUrl": "https://skills.test/KS2"}),
    ]
}

#[test]
fn test_record_columns_are_union_sorted() {
    assert_eq!(
        record_columns(&sample_records()),
        vec!["id", "infoUrl", "name", "type"]
    );
}

#[test]
fn test_cell_text() {
    assert_eq!(cell_text(None), "");
    assert_eq!(cell_text(Some(&json!(null))), "");
    assert_eq!(cell_text(Some(&json!("SQL"))), "SQL");
    assert_eq!(cell_text(Some(&json!(3))), "3");
    assert_eq!(cell_text(Some(&json!(true))), "true");
    assert_eq!(cell_text(Some(&json!({"id": "ST1"}))), r#"{"id":"ST1"}"#);
}

#[test]
fn test_multiline_text_is_written_verbatim() {
    let records = vec![json!({"id": "KS1", "description": "a\r\nb\n"})];
    let mut buffer = Vec::new();
    write_records_csv(&records, &mut buffer).unwrap();

    let mut reader = Reader::from_reader(buffer.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers, vec!["description", "id"]);

    let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "a\r\nb\n");
    assert_eq!(&rows[0][1], "KS1");
}

#[test]
fn test_records_without_keys_write_nothing() {
    let mut buffer = Vec::new();
    let rows = write_records_csv(&[json!({}), json!(42)], &mut buffer).unwrap();
    assert_eq!(rows, 0);
    assert!(buffer.is_empty());
}

#[test]
fn test_write_records_csv() {
    let mut buffer = Vec::new();
    let rows = write_records_csv(&sample_records(), &mut buffer).unwrap();
    assert_eq!(rows, 2);

    let csv = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,infoUrl,name,type");
    assert!(lines[1].starts_with("KS1,,SQL,"));
    assert!(lines[1].contains("Hard Skill"));
    assert_eq!(lines[2], "KS2,https://skills.test/KS2,Teamwork,");
}

#[test]
fn test_export_records_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all_skills.csv");

    let rows = export_records_csv(&sample_records(), &path).unwrap();

    assert_eq!(rows, 2);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("id,infoUrl,name,type"));
}
