use crate::types::{Boundary, GridSize};

/// The fixed box-group layout for a grid size, in row-major box order.
///
/// 4x4 grids split into four 2x2 boxes; 6x6 grids into six 2-row by 3-column
/// boxes. Boundaries partition the grid exactly: every cell in one box, every
/// box holding N cells.
pub fn boundaries_for(size: GridSize) -> Vec<Boundary> {
    let (box_rows, box_cols) = match size {
        GridSize::Four => (2, 2),
        GridSize::Six => (2, 3),
    };
    let n = size.side_len();

    let mut boundaries = Vec::new();
    for row_start in (0..n).step_by(box_rows) {
        for col_start in (0..n).step_by(box_cols) {
            boundaries.push(Boundary {
                row_start,
                row_end: row_start + box_rows - 1,
                col_start,
                col_end: col_start + box_cols - 1,
            });
        }
    }
    boundaries
}
