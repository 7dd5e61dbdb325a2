//! Integration tests for csvtable

use csvtable::{CsvError, CsvTable};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_file_contents() {
    // File I/O is the caller's job; write a file, read it back, parse.
    let mut temp = NamedTempFile::new().unwrap();
    write!(temp, "Name,Age,City\r\nAlice,30,NYC\r\nBob,25,SF\r\n").unwrap();

    let text = std::fs::read_to_string(temp.path()).unwrap();
    let table = CsvTable::parse(&text).unwrap();

    assert_eq!(table.headers, vec!["Name", "Age", "City"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["Alice", "30", "NYC"]);
    assert_eq!(table.keyed_rows[1]["City"], "SF");
}

#[test]
fn test_full_document_shape() {
    let text = "id,name,note\n\
                1,Alice,\"likes, commas\"\n\
                \n\
                2,Bob,\n\
                3,\"Multi\nline\",x\n";

    let table = CsvTable::parse(text).unwrap();

    assert_eq!(table.headers, vec!["id", "name", "note"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows[0], vec!["1", "Alice", "likes, commas"]);
    assert_eq!(table.rows[1], vec!["2", "Bob", ""]);
    assert_eq!(table.rows[2], vec!["3", "Multi\nline", "x"]);

    // Empty note for Bob is omitted from the keyed map.
    assert_eq!(table.keyed_rows[1].len(), 2);
    assert!(!table.keyed_rows[1].contains_key("note"));
    assert_eq!(table.keyed_rows[2]["name"], "Multi\nline");
}

#[test]
fn test_keyed_rows_preserve_header_order() {
    let table = CsvTable::parse("b,a,c\n1,2,3\n").unwrap();
    let keys: Vec<&String> = table.keyed_rows[0].keys().collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_rows_and_keyed_rows_stay_in_lockstep() {
    let table = CsvTable::parse("h1,h2\na,b\n,\nc,d\n").unwrap();
    assert_eq!(table.rows.len(), table.keyed_rows.len());
    // The "," row parses to two empty cells and an empty keyed map.
    assert_eq!(table.rows[1], vec!["", ""]);
    assert!(table.keyed_rows[1].is_empty());
}

#[test]
fn test_header_only_document() {
    let table = CsvTable::parse("h1,h2\n").unwrap();
    assert_eq!(table.headers, vec!["h1", "h2"]);
    assert!(table.is_empty());
    assert!(table.keyed_rows.is_empty());
}

#[test]
fn test_whitespace_only_document_is_empty_input() {
    assert_eq!(CsvTable::parse("\n\n  \n"), Err(CsvError::EmptyInput));
}

#[test]
fn test_error_display() {
    let err = CsvTable::builder()
        .separator("")
        .parse("a,b\n")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid separator: separator must not be empty"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let table = CsvTable::parse("h1,h2\nv1,v2\n").unwrap();
    let json = serde_json::to_string(&table).unwrap();
    let back: CsvTable = serde_json::from_str(&json).unwrap();
    assert_eq!(table, back);
}
