#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. An offset at the very end of the source
/// resolves to the last line so EOF errors still point somewhere.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // pos == source.len()
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            Some((line_number - 1, line.to_string(), line.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnrecognisedToken
/// -> main.tea
///   |
/// 1 | 1 + #
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    // Columns count characters, not bytes.
    let column = line_text
        .get(removed_whitespace..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0);
    let arrows = column + 1;
    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches(' ').len();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("1 +\n2 *", 7).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "2 *");
        assert_eq!(line_pos, 3);

        assert!(super::get_line_at_position("abc", 4).is_none());
    }

    #[test]
    fn test_format_error_points_at_offset() {
        let error = Error::new(
            ErrorImpl::UnrecognisedToken { token: "#".to_string() },
            Position(4, Rc::new("main.tea".to_string())),
        );

        let rendered = super::format_error(&error, "1 + #");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedToken");
        assert_eq!(lines[1], "-> main.tea");
        assert_eq!(lines[3], "1 | 1 + #");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_format_error_counts_characters_before_offset() {
        let error = Error::new(
            ErrorImpl::UnrecognisedToken { token: "#".to_string() },
            Position(7, Rc::new("main.tea".to_string())),
        );

        // `é` is two bytes wide, so `#` at byte 7 is the fifth character
        // after the indentation.
        let rendered = super::format_error(&error, "  é + #");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | é + #");
        assert_eq!(lines[4], "  | ----^");
    }
}
