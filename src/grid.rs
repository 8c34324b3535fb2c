//! Building a puzzle grid from a raw scalar range plus its bold flags.

use clap::ArgEnum;

use crate::error::{Error, Result};
use crate::source::Scalar;
use crate::types::{Cell, Grid, GridSize};

/// Which subset of the source values lands in the grid. The bold style marks
/// a cell as a given clue; revisions of the source format disagreed on
/// whether the puzzle shows the bold or the non-bold subset, so the choice is
/// explicit configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum)]
pub enum GivenPolicy {
    /// Keep only bold cells; everything else becomes empty.
    Given,
    /// Keep only non-bold cells.
    Hidden,
    /// Keep everything (the solution page).
    All,
}

impl GivenPolicy {
    fn keeps(&self, is_bold: bool) -> bool {
        match self {
            GivenPolicy::Given => is_bold,
            GivenPolicy::Hidden => !is_bold,
            GivenPolicy::All => true,
        }
    }
}

/// Reads an N x N scalar matrix into a grid, applying the given-subset
/// policy. Empty scalars stay empty; anything else must be an integer in
/// [1, N]. A mostly-empty result is normal, not an error.
pub fn from_range(
    values: &[Vec<Scalar>],
    bold: &[Vec<bool>],
    size: GridSize,
    policy: GivenPolicy,
) -> Result<Grid> {
    let n = size.side_len();
    if values.len() != n || bold.len() != n {
        return Err(Error::Shape {
            expected: n,
            row: None,
            found: values.len(),
        });
    }

    let mut rows = Vec::with_capacity(n);
    for (r, (value_row, bold_row)) in values.iter().zip(bold).enumerate() {
        if value_row.len() != n || bold_row.len() != n {
            return Err(Error::Shape {
                expected: n,
                row: Some(r),
                found: value_row.len(),
            });
        }

        let mut row = Vec::with_capacity(n);
        for (c, (scalar, &is_bold)) in value_row.iter().zip(bold_row).enumerate() {
            if scalar.is_empty() {
                row.push(None);
                continue;
            }

            let value = match scalar.as_value() {
                Some(value) if value <= size.max_value() => value,
                _ => {
                    return Err(Error::Range {
                        row: r,
                        col: c,
                        found: scalar.to_string(),
                        max: size.max_value(),
                    })
                }
            };

            row.push(policy.keeps(is_bold).then(|| Cell {
                value,
                is_given: is_bold,
            }));
        }
        rows.push(row);
    }

    Grid::from_rows(size, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Scalar {
        Scalar::Number(n)
    }

    fn fixture() -> (Vec<Vec<Scalar>>, Vec<Vec<bool>>) {
        // 4x4 solved grid; diagonal is bold.
        let values = vec![
            vec![num(1.0), num(2.0), num(3.0), num(4.0)],
            vec![num(3.0), num(4.0), num(1.0), num(2.0)],
            vec![num(2.0), num(1.0), num(4.0), num(3.0)],
            vec![num(4.0), num(3.0), num(2.0), num(1.0)],
        ];
        let bold = (0..4)
            .map(|r| (0..4).map(|c| r == c).collect())
            .collect::<Vec<Vec<bool>>>();
        (values, bold)
    }

    #[test]
    fn given_policy_keeps_bold_only() {
        let (values, bold) = fixture();
        let grid = from_range(&values, &bold, GridSize::Four, GivenPolicy::Given).unwrap();

        assert_eq!(
            grid.cell(0, 0),
            Some(Cell {
                value: 1,
                is_given: true
            })
        );
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.given_cells().len(), 4);
    }

    #[test]
    fn hidden_policy_inverts_the_subset() {
        let (values, bold) = fixture();
        let grid = from_range(&values, &bold, GridSize::Four, GivenPolicy::Hidden).unwrap();

        assert_eq!(grid.cell(0, 0), None);
        assert_eq!(
            grid.cell(0, 1),
            Some(Cell {
                value: 2,
                is_given: false
            })
        );
        assert!(grid.given_cells().is_empty());
    }

    #[test]
    fn all_policy_keeps_everything() {
        let (values, bold) = fixture();
        let grid = from_range(&values, &bold, GridSize::Four, GivenPolicy::All).unwrap();

        for r in 0..4 {
            for c in 0..4 {
                assert!(grid.cell(r, c).is_some());
            }
        }
    }

    #[test]
    fn non_numeric_cell_reports_what_it_found() {
        let (mut values, bold) = fixture();
        values[2][2] = Scalar::Text("x".to_string());
        let err = from_range(&values, &bold, GridSize::Four, GivenPolicy::All).unwrap_err();
        assert!(matches!(
            err,
            Error::Range { row: 2, col: 2, ref found, .. } if found == "x"
        ));
    }

    #[test]
    fn fractional_value_reports_what_it_found() {
        let (mut values, bold) = fixture();
        values[1][0] = num(2.5);
        let err = from_range(&values, &bold, GridSize::Four, GivenPolicy::All).unwrap_err();
        assert!(matches!(
            err,
            Error::Range { row: 1, col: 0, ref found, .. } if found == "2.5"
        ));
    }

    #[test]
    fn oversized_value_is_a_range_error() {
        let (mut values, bold) = fixture();
        values[0][0] = num(7.0);
        let err = from_range(&values, &bold, GridSize::Four, GivenPolicy::All).unwrap_err();
        assert!(matches!(
            err,
            Error::Range { ref found, max: 4, .. } if found == "7"
        ));
    }
}
