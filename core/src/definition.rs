//! Parser for the plain-text board-definition format.
//!
//! ```text
//! <cols> <rows>
//! <row 0: cols tokens of 0|1 separated by single spaces>
//! ...
//! <row rows-1>
//! ```
//!
//! A `1` token places a mine. Blank lines after the last data row are
//! tolerated; any other trailing content is rejected.

use std::io::Read;

use ndarray::Array2;

use crate::error::{BoardDefinitionError, Result};
use crate::types::Coord;

/// Reads a whole definition from any `Read` source, then parses it.
///
/// Generic over `Read` so tests can use byte slices and callers can pass
/// a `BufReader<File>`.
pub(crate) fn read_from(mut reader: impl Read) -> Result<Array2<bool>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

/// Parses a definition into the mine mask, indexed `[x, y]`.
pub(crate) fn parse(text: &str) -> Result<Array2<bool>> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    let (cols, rows) = parse_header(header)?;

    let mut mines = Array2::default([cols, rows]);
    for row in 0..rows {
        let line = lines.next().ok_or(BoardDefinitionError::RowCountMismatch {
            expected: rows,
            found: row,
        })?;
        parse_row(line, row, cols, &mut mines)?;
    }

    for (extra, line) in lines.enumerate() {
        if !line.is_empty() {
            return Err(BoardDefinitionError::TrailingContent {
                line: rows + 2 + extra,
            });
        }
    }

    Ok(mines)
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let malformed = || BoardDefinitionError::MalformedHeader {
        line: line.to_owned(),
    };

    let mut tokens = line.split_whitespace();
    let cols = tokens.next().and_then(parse_dim).ok_or_else(malformed)?;
    let rows = tokens.next().and_then(parse_dim).ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }
    Ok((cols, rows))
}

/// A dimension token: an integer in `1..=Coord::MAX`.
fn parse_dim(token: &str) -> Option<usize> {
    token
        .parse::<Coord>()
        .ok()
        .filter(|&dim| dim >= 1)
        .map(usize::from)
}

fn parse_row(line: &str, row: usize, cols: usize, mines: &mut Array2<bool>) -> Result<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != cols {
        return Err(BoardDefinitionError::RowLengthMismatch {
            row,
            expected: cols,
            found: tokens.len(),
        });
    }

    for (x, token) in tokens.into_iter().enumerate() {
        mines[[x, row]] = match token {
            "0" => false,
            "1" => true,
            _ => {
                return Err(BoardDefinitionError::InvalidToken {
                    row,
                    token: token.to_owned(),
                });
            }
        };
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mines_per_token() {
        let mines = parse("3 2\n1 0 1\n0 1 0").unwrap();
        assert_eq!(mines.dim(), (3, 2));
        assert!(mines[[0, 0]]);
        assert!(mines[[2, 0]]);
        assert!(mines[[1, 1]]);
        assert_eq!(mines.iter().filter(|&&mine| mine).count(), 3);
    }

    #[test]
    fn tolerates_trailing_blank_lines_only() {
        assert!(parse("1 1\n1").is_ok());
        assert!(parse("1 1\n1\n").is_ok());
        assert!(parse("1 1\n1\n\n").is_ok());

        assert!(matches!(
            parse("1 1\n1\n0"),
            Err(BoardDefinitionError::TrailingContent { line: 3 })
        ));
        assert!(matches!(
            parse("1 1\n1\n\n0 0"),
            Err(BoardDefinitionError::TrailingContent { line: 4 })
        ));
    }

    #[test]
    fn rejects_bad_headers() {
        for text in ["", "2", "a b", "2 2 2", "0 3", "3 0", "-1 3", "256 1"] {
            assert!(
                matches!(
                    parse(text),
                    Err(BoardDefinitionError::MalformedHeader { .. })
                ),
                "header {text:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_row_length_mismatch() {
        assert!(matches!(
            parse("2 2\n0 0 0\n0 0"),
            Err(BoardDefinitionError::RowLengthMismatch {
                row: 0,
                expected: 2,
                found: 3,
            })
        ));
    }

    #[test]
    fn rejects_invalid_tokens() {
        let err = parse("2 1\n0 2").unwrap_err();
        assert!(matches!(
            err,
            BoardDefinitionError::InvalidToken { row: 0, ref token } if token == "2"
        ));
    }

    #[test]
    fn rejects_missing_rows() {
        assert!(matches!(
            parse("2 3\n0 0\n1 1"),
            Err(BoardDefinitionError::RowCountMismatch {
                expected: 3,
                found: 2,
            })
        ));
    }

    #[test]
    fn read_from_reports_unreadable_sources() {
        assert!(read_from(&b"2 1\n0 1\n"[..]).is_ok());

        // not UTF-8, the read itself fails
        let err = read_from(&b"\xff\xfe"[..]).unwrap_err();
        assert!(matches!(err, BoardDefinitionError::SourceUnavailable(_)));
    }
}
