use thiserror::Error;

/// Failure modes of board-definition parsing. Construction either succeeds
/// fully or yields no board at all.
#[derive(Error, Debug)]
pub enum BoardDefinitionError {
    #[error("definition source unavailable")]
    SourceUnavailable(#[from] std::io::Error),
    #[error("header must be two integers `cols rows` in 1..={max}, got {line:?}", max = crate::Coord::MAX)]
    MalformedHeader { line: String },
    #[error("data row {row} has {found} tokens, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("data row {row} contains invalid token {token:?}")]
    InvalidToken { row: usize, token: String },
    #[error("definition declares {expected} rows but only {found} present")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("trailing content on line {line} after the last data row")]
    TrailingContent { line: usize },
}

pub type Result<T> = std::result::Result<T, BoardDefinitionError>;
