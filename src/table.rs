//! CSV table construction
//!
//! Turns a full CSV document held in memory into an ordered table:
//! headers, positional rows, and per-row name-keyed maps. File I/O is
//! the caller's concern; read the document into a `&str` first.

use crate::error::{CsvError, Result};
use crate::split;
use indexmap::IndexMap;

/// Parsed CSV document
///
/// Constructed once from an input string and immutable thereafter.
/// `rows` holds the raw positional cells exactly as parsed; no padding
/// or truncation against the header count is performed. `keyed_rows`
/// zips headers with cells positionally, omitting empty or
/// whitespace-only values and dropping positions beyond the header
/// count. `rows.len() == keyed_rows.len()` always holds.
///
/// # Examples
///
/// ```
/// use csvtable::CsvTable;
///
/// let table = CsvTable::parse("name,city\nAlice,NYC\nBob,SF\n").unwrap();
///
/// assert_eq!(table.headers, vec!["name", "city"]);
/// assert_eq!(table.rows.len(), 2);
/// assert_eq!(table.keyed_rows[0]["city"], "NYC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsvTable {
    /// Column names, either supplied by the caller or taken from the
    /// first record (unique by convention, not enforced)
    pub headers: Vec<String>,
    /// Data rows as positional cells
    pub rows: Vec<Vec<String>>,
    /// One header-keyed map per data row, in row order
    pub keyed_rows: Vec<IndexMap<String, String>>,
}

impl CsvTable {
    /// Parse CSV text with the default comma separator, taking headers
    /// from the first record.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvtable::CsvTable;
    ///
    /// let table = CsvTable::parse("h1,h2\nv1,v2\n").unwrap();
    /// assert_eq!(table.rows, vec![vec!["v1", "v2"]]);
    /// ```
    pub fn parse(text: &str) -> Result<CsvTable> {
        CsvTableBuilder::new().parse(text)
    }

    /// Start configuring a parse (builder pattern)
    pub fn builder() -> CsvTableBuilder {
        CsvTableBuilder::new()
    }

    /// Get column names
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the positional cells of one data row, if it exists
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Get the keyed map of one data row, if it exists
    pub fn keyed_row(&self, index: usize) -> Option<&IndexMap<String, String>> {
        self.keyed_rows.get(index)
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Configuration for parsing CSV text into a [`CsvTable`]
///
/// # Examples
///
/// ```
/// use csvtable::CsvTable;
///
/// let table = CsvTable::builder()
///     .separator(";")
///     .headers(vec!["id".to_string(), "name".to_string()])
///     .parse("1;Alice\n2;Bob\n")
///     .unwrap();
///
/// assert_eq!(table.rows.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CsvTableBuilder {
    separator: String,
    headers: Option<Vec<String>>,
}

impl Default for CsvTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvTableBuilder {
    /// Create a builder with the default comma separator and headers
    /// taken from the first record
    pub fn new() -> Self {
        CsvTableBuilder {
            separator: ",".to_string(),
            headers: None,
        }
    }

    /// Set a custom separator (builder pattern)
    ///
    /// Any non-empty string is accepted, e.g. `"\t"` or `";"`. A
    /// multi-character separator is matched as a literal substring. A
    /// separator containing `"` is passed through unvalidated; quote
    /// parity then interacts with it in unspecified ways.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Supply explicit headers (builder pattern)
    ///
    /// When set, no record is consumed as a header row; every parsed
    /// record becomes a data row.
    pub fn headers(mut self, headers: Vec<String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Parse the given CSV text into a [`CsvTable`]
    ///
    /// `\r\n` line endings are normalized to `\n` first. Blank and
    /// whitespace-only lines are discarded. Returns
    /// [`CsvError::EmptyInput`] when the input yields no records and
    /// no explicit headers were supplied, and
    /// [`CsvError::InvalidSeparator`] for an empty separator.
    pub fn parse(self, text: &str) -> Result<CsvTable> {
        if self.separator.is_empty() {
            return Err(CsvError::InvalidSeparator(
                "separator must not be empty".to_string(),
            ));
        }

        let normalized = text.replace("\r\n", "\n");
        let mut parsed: Vec<Vec<String>> = split::records(&normalized)
            .iter()
            .map(|row| split::cells(row, &self.separator))
            .collect();

        let headers = match self.headers {
            Some(headers) => headers,
            None => {
                if parsed.is_empty() {
                    return Err(CsvError::EmptyInput);
                }
                parsed.remove(0)
            }
        };

        let keyed_rows = parsed
            .iter()
            .map(|row| {
                let mut keyed = IndexMap::new();
                for (index, value) in row.iter().enumerate() {
                    if split::is_blank(value) {
                        continue;
                    }
                    if let Some(header) = headers.get(index) {
                        keyed.insert(header.clone(), value.clone());
                    }
                }
                keyed
            })
            .collect();

        Ok(CsvTable {
            headers,
            rows: parsed,
            keyed_rows,
        })
    }
}
