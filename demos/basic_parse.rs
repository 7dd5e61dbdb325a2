//! Basic Parsing Example
//!
//! Demonstrates parsing a CSV document with headers taken from the
//! first record, including a quoted cell containing the separator.

use csvtable::CsvTable;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Basic Parse Example ===\n");

    let text = "name,age,city\n\
                Alice,30,\"New York, NY\"\n\
                Bob,25,SF\n";

    let table = CsvTable::parse(text)?;

    println!("Headers: {:?}", table.headers);
    for (i, row) in table.rows.iter().enumerate() {
        println!("Row {}: {:?}", i + 1, row);
    }
    println!("Total rows: {}", table.row_count());

    Ok(())
}
