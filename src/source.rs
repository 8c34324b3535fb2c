//! Read/write interfaces onto the external spreadsheet product. The core
//! depends only on these; concrete implementations live in `io`.

use std::fmt;

use crate::error::Result;

/// A scalar cell value as the spreadsheet reports it.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Empty,
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<u32> {
        match self {
            Scalar::Number(n) if *n >= 1.0 && n.fract() == 0.0 => Some(*n as u32),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Empty) || matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Empty => Ok(()),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Read access to the active sheet plus by-name range reads for the
/// cross-sheet indirection. Coordinates are 0-indexed. Styling is read only
/// through `range_bold`; grid construction always pulls a full block of
/// flags, so there is no per-cell style accessor.
pub trait DataSource {
    fn cell_formula(&self, row: usize, col: usize) -> Result<String>;
    fn cell_value(&self, row: usize, col: usize) -> Result<Scalar>;

    /// Number of rows in the active sheet.
    fn num_rows(&self) -> usize;

    fn range(&self, sheet: &str, a1_range: &str) -> Result<Vec<Vec<Scalar>>>;
    fn range_bold(&self, sheet: &str, a1_range: &str) -> Result<Vec<Vec<bool>>>;
}

/// Sheet-copy operations used to stamp out one marked grid per puzzle.
pub trait TemplateSheets {
    fn delete_if_exists(&mut self, name: &str) -> Result<()>;
    fn copy_template(&mut self, template: &str, name: &str) -> Result<()>;
    fn set_cell(&mut self, sheet: &str, row: usize, col: usize, value: &str) -> Result<()>;
}
