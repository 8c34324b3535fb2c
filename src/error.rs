use thiserror::Error;

use crate::types::CellValue;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is fatal to the puzzle being processed; nothing here is
/// retried or recovered locally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("grid is not {expected}x{expected}: {}", shape_detail(.row, .found))]
    Shape {
        expected: usize,
        /// `None` means the row count itself is wrong.
        row: Option<usize>,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds {found:?}, outside 1..={max}")]
    Range {
        row: usize,
        col: usize,
        /// Display form of the offending cell content.
        found: String,
        max: CellValue,
    },

    #[error(
        "found {found} image cells in header row {row}, columns {col_start}..={col_end}; \
         expected exactly 4 or 6"
    )]
    InvalidGridSize {
        row: usize,
        col_start: usize,
        col_end: usize,
        found: usize,
    },

    #[error("value {value} is outside 1..={max}")]
    ValueOutOfRange { value: CellValue, max: CellValue },

    #[error("cell ({row}, {col}) does not hold an image formula: {found:?}")]
    MissingFormula {
        row: usize,
        col: usize,
        found: String,
    },

    #[error("image formula at ({row}, {col}) has an unusable argument: {formula:?}")]
    MalformedFormula {
        row: usize,
        col: usize,
        formula: String,
    },

    #[error("image reference {reference} resolves to an empty cell")]
    EmptyReference { reference: String },

    #[error("collaborator failure: {0}")]
    Collaborator(String),
}

fn shape_detail(row: &Option<usize>, found: &usize) -> String {
    match row {
        None => format!("{} rows", found),
        Some(row) => format!("row {} has {} cells", row, found),
    }
}

impl Error {
    /// Wraps an external-interface failure (data source, sink, fetch, copy).
    pub fn collaborator<E: std::fmt::Display>(context: &str, err: E) -> Error {
        Error::Collaborator(format!("{}: {}", context, err))
    }
}
