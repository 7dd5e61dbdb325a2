//! Custom Separator Example
//!
//! Demonstrates semicolon- and tab-separated input, plus supplying
//! explicit headers so no record is consumed as a header row.

use csvtable::CsvTable;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Custom Separator Example ===\n");

    // Semicolon-separated with explicit headers
    let table = CsvTable::builder()
        .separator(";")
        .headers(vec!["id".to_string(), "name".to_string()])
        .parse("1;Alice\n2;\"Bob; Jr.\"\n")?;

    println!("Semicolon separated:");
    for row in &table.rows {
        println!("   {:?}", row);
    }

    // Tab-separated, headers from the first record
    let table = CsvTable::builder()
        .separator("\t")
        .parse("name\tcity\nAlice\tNYC\n")?;

    println!("\nTab separated:");
    println!("   Headers: {:?}", table.headers);
    println!("   Row: {:?}", table.rows[0]);

    Ok(())
}
