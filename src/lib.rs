//! # csvtable
//!
//! Quote-aware CSV parsing into an in-memory table: ordered headers,
//! positional rows, and insertion-ordered name-keyed maps per row.
//!
//! The parser splits on the separator and merges fragments back
//! together while a double-quoted span is open (quote parity), so
//! quoted cells may contain the separator or newlines. Both `\n` and
//! `\r\n` line endings are accepted. Malformed input is handled best
//! effort and never rejected; only an empty separator or an input with
//! no records (and no supplied headers) is an error.
//!
//! # Quick Start
//!
//! ```
//! use csvtable::CsvTable;
//!
//! let table = CsvTable::parse("name,age\nAlice,30\nBob,25\n")?;
//!
//! assert_eq!(table.headers, vec!["name", "age"]);
//! assert_eq!(table.rows[0], vec!["Alice", "30"]);
//! assert_eq!(table.keyed_rows[1]["age"], "25");
//! # Ok::<(), csvtable::CsvError>(())
//! ```
//!
//! # Custom separator and explicit headers
//!
//! ```
//! use csvtable::CsvTable;
//!
//! let table = CsvTable::builder()
//!     .separator(";")
//!     .headers(vec!["id".to_string(), "name".to_string()])
//!     .parse("1;Alice\n2;Bob\n")?;
//!
//! assert_eq!(table.rows.len(), 2);
//! # Ok::<(), csvtable::CsvError>(())
//! ```
//!
//! File I/O stays with the caller: read the document into a string,
//! then parse it.

mod error;
mod split;
mod table;

pub use error::{CsvError, Result};
pub use table::{CsvTable, CsvTableBuilder};
