//! Access-line parsing.
//!
//! The accepted grammar, matched over the whole line:
//!
//! ```text
//! <ip> [-] [<YYYY-MM-DD HH:MM:SS.ffffff>] "<request>" <status_code> <file_size>
//! ```
//!
//! Fields are separated by runs of whitespace. Anything that deviates yields
//! the sentinel record instead of an error.

mod cursor;
mod date;

use crate::record::LogRecord;
use cursor::Cursor;
use date::is_timestamp;

/// Every field captured from a line that matched the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessLine<'a> {
    pub ip: &'a str,
    /// Bracket contents, e.g. `2017-02-05 23:31:22.258076`.
    pub date: &'a str,
    /// Quote contents, e.g. `GET /projects/260 HTTP/1.1`.
    pub request: &'a str,
    pub status_code: &'a str,
    pub file_size: u64,
}

impl From<AccessLine<'_>> for LogRecord {
    fn from(line: AccessLine<'_>) -> Self {
        LogRecord::new(line.status_code, line.file_size)
    }
}

/// Matches `line` against the access-log grammar.
///
/// Returns `None` unless the entire line conforms. Leading and trailing
/// whitespace is ignored.
pub fn parse_access_line(line: &str) -> Option<AccessLine<'_>> {
    let mut cursor = Cursor::new(line.trim());

    let ip = cursor.token()?;
    cursor.gap()?;

    // Optional identity placeholder: `1.2.3.4 - [..]`.
    if cursor.starts_with('-') {
        if cursor.token()? != "-" {
            return None;
        }
        cursor.gap()?;
    }

    let date = cursor.delimited('[', ']')?;
    if !is_timestamp(date) {
        return None;
    }
    cursor.gap()?;

    let request = cursor.delimited('"', '"')?;
    cursor.gap()?;

    let status_code = cursor.token()?;
    cursor.gap()?;

    let size = cursor.token()?;
    if !cursor.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let file_size = size.parse::<u64>().ok()?;

    Some(AccessLine {
        ip,
        date,
        request,
        status_code,
        file_size,
    })
}

/// Converts one raw line into a [`LogRecord`], falling back to
/// [`LogRecord::sentinel`] when the line does not match.
pub fn parse_line(line: &str) -> LogRecord {
    parse_access_line(line)
        .map(LogRecord::from)
        .unwrap_or_else(LogRecord::sentinel)
}
