use derive_more::Display;

use crate::error::{Error, Result};

pub type CellValue = u32;

/// The two puzzle sizes the spreadsheet layout supports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum GridSize {
    #[display(fmt = "4x4")]
    Four,
    #[display(fmt = "6x6")]
    Six,
}

impl GridSize {
    pub fn side_len(&self) -> usize {
        match self {
            GridSize::Four => 4,
            GridSize::Six => 6,
        }
    }

    pub fn max_value(&self) -> CellValue {
        self.side_len() as CellValue
    }

    pub fn values(&self) -> impl Iterator<Item = CellValue> {
        1..=self.max_value()
    }
}

/// A populated puzzle cell. `is_given` is set once at grid construction from
/// the source's styling signal; nothing downstream inspects styling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value: CellValue,
    pub is_given: bool,
}

#[derive(Debug, Clone)]
pub struct Grid {
    size: GridSize,
    rows: Vec<Vec<Option<Cell>>>,
}

impl Grid {
    pub fn empty(size: GridSize) -> Grid {
        let n = size.side_len();
        Grid {
            size,
            rows: vec![vec![None; n]; n],
        }
    }

    pub fn from_rows(size: GridSize, rows: Vec<Vec<Option<Cell>>>) -> Result<Grid> {
        let grid = Grid { size, rows };
        grid.validate()?;
        Ok(grid)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Option<Cell>) {
        self.rows[row][col] = cell;
    }

    /// Shape and range invariants. Run before every slicing pass; idempotent.
    pub fn validate(&self) -> Result<()> {
        let n = self.size.side_len();
        if self.rows.len() != n {
            return Err(Error::Shape {
                expected: n,
                row: None,
                found: self.rows.len(),
            });
        }
        for (r, row) in self.rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::Shape {
                    expected: n,
                    row: Some(r),
                    found: row.len(),
                });
            }
            for (c, cell) in row.iter().enumerate() {
                if let Some(cell) = cell {
                    if cell.value < 1 || cell.value > self.size.max_value() {
                        return Err(Error::Range {
                            row: r,
                            col: c,
                            found: cell.value.to_string(),
                            max: self.size.max_value(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Coordinates of every cell marked as a given clue, row-major.
    pub fn given_cells(&self) -> Vec<(usize, usize)> {
        let mut result = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if matches!(cell, Some(cell) if cell.is_given) {
                    result.push((r, c));
                }
            }
        }
        result
    }
}

/// An inclusive, 0-indexed box-group rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Boundary {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Boundary {
    pub fn num_cells(&self) -> usize {
        (self.row_end - self.row_start + 1) * (self.col_end - self.col_start + 1)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row_start && row <= self.row_end && col >= self.col_start && col <= self.col_end
    }
}
