//! Extraction of the three canonical slice families (rows, columns, box
//! groups) plus the full reference enumeration.

use crate::error::Result;
use crate::resolve::CellAddressResolver;
use crate::types::{Boundary, CellValue, Grid, GridSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceEntry {
    pub locator: String,
    pub value: CellValue,
}

/// Resolved locators from one axis of the grid. Extraction order is spatial;
/// entries are sorted ascending by value before anything renders them, so the
/// booklet always lists candidates in canonical numeric order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub entries: Vec<SliceEntry>,
}

impl Slice {
    fn sorted(mut entries: Vec<SliceEntry>) -> Slice {
        entries.sort_by_key(|entry| entry.value);
        Slice { entries }
    }

    pub fn values(&self) -> Vec<CellValue> {
        self.entries.iter().map(|entry| entry.value).collect()
    }
}

pub struct SliceExtractor<'a> {
    resolver: &'a CellAddressResolver<'a>,
}

impl<'a> SliceExtractor<'a> {
    pub fn new(resolver: &'a CellAddressResolver<'a>) -> Self {
        SliceExtractor { resolver }
    }

    /// One slice per grid row, in row order; non-empty cells in column order.
    /// Sparse rows produce short or empty slices, which is normal.
    pub fn row_slices(&self, grid: &Grid) -> Result<Vec<Slice>> {
        grid.validate()?;
        let n = grid.size().side_len();

        let mut slices = Vec::with_capacity(n);
        for r in 0..n {
            let mut entries = Vec::new();
            for c in 0..n {
                if let Some(cell) = grid.cell(r, c) {
                    entries.push(self.entry(cell.value)?);
                }
            }
            slices.push(Slice::sorted(entries));
        }
        Ok(slices)
    }

    /// One slice per grid column, non-empty cells in row order.
    pub fn column_slices(&self, grid: &Grid) -> Result<Vec<Slice>> {
        grid.validate()?;
        let n = grid.size().side_len();

        let mut slices = Vec::with_capacity(n);
        for c in 0..n {
            let mut entries = Vec::new();
            for r in 0..n {
                if let Some(cell) = grid.cell(r, c) {
                    entries.push(self.entry(cell.value)?);
                }
            }
            slices.push(Slice::sorted(entries));
        }
        Ok(slices)
    }

    /// One slice per topology boundary, scanned row-major within the box.
    pub fn group_slices(&self, grid: &Grid, topology: &[Boundary]) -> Result<Vec<Slice>> {
        grid.validate()?;

        let mut slices = Vec::with_capacity(topology.len());
        for boundary in topology {
            let mut entries = Vec::new();
            for r in boundary.row_start..=boundary.row_end {
                for c in boundary.col_start..=boundary.col_end {
                    if let Some(cell) = grid.cell(r, c) {
                        entries.push(self.entry(cell.value)?);
                    }
                }
            }
            slices.push(Slice::sorted(entries));
        }
        Ok(slices)
    }

    /// Every value's locator repeated N times, values in ascending order.
    /// Rendering prints this as one reference row per value.
    pub fn reference_slice(&self, size: GridSize) -> Result<Slice> {
        let n = size.side_len();
        let mut entries = Vec::with_capacity(n * n);
        for value in size.values() {
            let entry = self.entry(value)?;
            for _ in 0..n {
                entries.push(entry.clone());
            }
        }
        // Already in ascending value order by construction.
        Ok(Slice { entries })
    }

    fn entry(&self, value: CellValue) -> Result<SliceEntry> {
        Ok(SliceEntry {
            locator: self.resolver.resolve(value)?,
            value,
        })
    }
}
