//! Quote-parity splitting primitives
//!
//! The splitter performs a naive substring split and then re-merges
//! adjacent fragments whenever the previous fragment holds an odd
//! number of `"` characters, meaning a quoted span is still open.
//! Doubled quotes (`""`) are not treated as escapes; they simply keep
//! the parity even.

/// True if the string is empty or consists solely of whitespace.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn has_unclosed_quote(s: &str) -> bool {
    s.matches('"').count() % 2 == 1
}

/// Split `text` on every non-overlapping occurrence of `separator`,
/// keeping quoted spans intact.
///
/// Fragments are merged left to right: while the last emitted fragment
/// contains an odd number of `"` characters, the next fragment is
/// appended to it with the separator re-inserted. An unterminated
/// quote absorbs everything to the end of input; the trailing merged
/// fragment is returned as-is.
pub(crate) fn split_quoted(separator: &str, text: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for fragment in text.split(separator) {
        if let Some(last) = merged.last_mut() {
            if has_unclosed_quote(last) {
                last.push_str(separator);
                last.push_str(fragment);
                continue;
            }
        }
        merged.push(fragment.to_string());
    }
    merged
}

/// Split whole input into row-strings, dropping blank rows.
///
/// Assumes `\r\n` has already been normalized to `\n` by the caller.
pub(crate) fn records(text: &str) -> Vec<String> {
    split_quoted("\n", text)
        .into_iter()
        .filter(|row| !is_blank(row))
        .collect()
}

/// Split one row-string into cell strings and strip one outer pair of
/// double quotes from each cell that carries one.
pub(crate) fn cells(row: &str, separator: &str) -> Vec<String> {
    split_quoted(separator, row)
        .into_iter()
        .map(strip_outer_quotes)
        .collect()
}

/// Remove exactly one leading and one trailing `"` when both are
/// present. A lone `"` and interior quotes are left untouched.
fn strip_outer_quotes(field: String) -> String {
    // '"' is a single byte, so byte slicing stays on char boundaries.
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field[1..field.len() - 1].to_string()
    } else {
        field
    }
}
