// logtally - core/parser.rs
//
// Line-oriented log parsing.
// Core layer: accepts BufRead trait objects, never touches the filesystem.
//
// Line grammar: DATE TIME LEVEL MESSAGE...
// Tokens are separated by runs of whitespace. The message is everything after
// the run that follows LEVEL, kept verbatim.

use crate::core::model::LogRecord;
use crate::util::constants;
use regex::Regex;
use std::io::{self, BufRead};
use std::sync::OnceLock;

/// Result of parsing a whole log stream.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Valid records in stream order.
    pub records: Vec<LogRecord>,
    /// Total lines read, blank ones included.
    pub lines_read: u64,
    /// Non-blank lines that did not form a record.
    pub lines_skipped: u64,
}

fn line_pattern() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| {
        Regex::new(r"(?s)^(?P<date>\S+)\s+(?P<time>\S+)\s+(?P<level>\S+)\s+(?P<message>.+)$")
            .expect("parse_line: invalid regex")
    })
}

/// Parse one raw line into a record.
///
/// Returns `None` when the trimmed line has fewer than four
/// whitespace-delimited parts. No field is validated beyond being non-empty.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = line_pattern().captures(line.trim())?;
    Some(LogRecord {
        date: caps["date"].to_string(),
        time: caps["time"].to_string(),
        level: caps["level"].to_string(),
        message: caps["message"].to_string(),
    })
}

/// Parse every line of `reader` in order.
///
/// Blank lines are skipped without parsing. Lines that do not form a record
/// are dropped and only tallied. I/O errors, including invalid UTF-8, are
/// returned unchanged so the caller can classify them.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<ParseResult> {
    let mut result = ParseResult::default();

    for line in reader.lines() {
        let line = line?;
        result.lines_read += 1;

        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Some(record) => result.records.push(record),
            None => {
                result.lines_skipped += 1;
                tracing::trace!(
                    line_number = result.lines_read,
                    preview = %preview(&line),
                    "Skipping malformed line"
                );
            }
        }
    }

    Ok(result)
}

/// Truncate a line for debug output on a char boundary.
fn preview(line: &str) -> &str {
    match line.char_indices().nth(constants::DEBUG_MAX_LINE_PREVIEW) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_basic_line() {
        let record = parse_line("2024-01-01 10:00:00 INFO Server started").unwrap();
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.time, "10:00:00");
        assert_eq!(record.level, "INFO");
        assert_eq!(record.message, "Server started");
    }

    #[test]
    fn test_parse_reconstructs_line() {
        let line = "2024-01-01 10:00:05 ERROR Connection failed: host=db  port=5432";
        let record = parse_line(line).unwrap();
        let rebuilt = format!(
            "{} {} {} {}",
            record.date, record.time, record.level, record.message
        );
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_parse_collapses_separator_runs_but_keeps_message_spacing() {
        let record = parse_line("  2024-01-01\t 10:00:00   WARN   disk   at  91%  \r").unwrap();
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.time, "10:00:00");
        assert_eq!(record.level, "WARN");
        assert_eq!(record.message, "disk   at  91%");
    }

    #[test]
    fn test_parse_single_word_message() {
        let record = parse_line("d t L m").unwrap();
        assert_eq!(record, LogRecord::new("d", "t", "L", "m"));
    }

    #[test]
    fn test_parse_accepts_any_tokens() {
        let record = parse_line("yesterday noon whatever something happened").unwrap();
        assert_eq!(record.level, "whatever");
    }

    #[test]
    fn test_parse_rejects_short_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("bad line"), None);
        assert_eq!(parse_line("2024-01-01 10:00:00 INFO"), None);
        assert_eq!(parse_line("2024-01-01 10:00:00 INFO   "), None);
    }

    #[test]
    fn test_parse_reader_keeps_order_and_tallies() {
        let content = "2024-01-01 10:00:00 INFO one\n\
                       \n\
                       bad line\n\
                       2024-01-01 10:00:01 ERROR two\n\
                       2024-01-01 10:00:02 INFO three\n";
        let result = parse_reader(Cursor::new(content)).unwrap();

        let messages: Vec<_> = result.records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two", "three"]);
        assert_eq!(result.lines_read, 5);
        assert_eq!(result.lines_skipped, 1);
    }

    #[test]
    fn test_parse_reader_handles_crlf() {
        let content = "2024-01-01 10:00:00 INFO one\r\n2024-01-01 10:00:01 DEBUG two\r\n";
        let result = parse_reader(Cursor::new(content)).unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[1].message, "two");
    }

    #[test]
    fn test_parse_reader_empty_input() {
        let result = parse_reader(Cursor::new("")).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.lines_read, 0);
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"2024-01-01 10:00:00 INFO ok\n\xff\xfe broken\n";
        let err = parse_reader(Cursor::new(bytes)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(constants::DEBUG_MAX_LINE_PREVIEW + 10);
        assert_eq!(
            preview(&long).chars().count(),
            constants::DEBUG_MAX_LINE_PREVIEW
        );
        assert_eq!(preview("short"), "short");
    }
}
