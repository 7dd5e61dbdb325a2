//! Keyed Rows Example
//!
//! Demonstrates the header-keyed row maps: insertion-ordered, with
//! empty values omitted.

use csvtable::CsvTable;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Keyed Rows Example ===\n");

    let text = "id,name,email\n\
                1,Alice,alice@example.com\n\
                2,Bob,\n";

    let table = CsvTable::parse(text)?;

    for (i, keyed) in table.keyed_rows.iter().enumerate() {
        println!("Row {}:", i + 1);
        for (header, value) in keyed {
            println!("   {} = {}", header, value);
        }
        // Bob has no email; the key is simply absent.
        if !keyed.contains_key("email") {
            println!("   (no email)");
        }
    }

    Ok(())
}
