//! Pattern placement: clamped projection and overlay merge.
//!
//! Both operations are pure: grids in, freshly allocated grid out. A
//! projection at a hovered coordinate is exactly the set of cells a stamp
//! at that coordinate would turn alive, so a presentation layer can render
//! previews without duplicating placement logic.

use crate::schema::Pattern;

use super::{Cell, EngineError, Grid, Team};

/// Project `pattern` onto an all-dead grid of the target dimensions.
///
/// The stamp's top-left corner lands at the anchor, clamped so the stamp
/// stays fully inside the grid: an anchor too close to the bottom or right
/// edge slides up/left until the far edge of the stamp aligns with the far
/// edge of the grid. Alive footprint cells carry `team`.
///
/// Fails with `PatternTooLarge` when the pattern exceeds the grid in
/// either dimension.
pub fn project(
    pattern: &Pattern,
    rows: usize,
    cols: usize,
    anchor_row: usize,
    anchor_col: usize,
    team: Option<Team>,
) -> Result<Grid, EngineError> {
    let height = pattern.height();
    let width = pattern.width();
    if height > rows || width > cols {
        return Err(EngineError::PatternTooLarge {
            name: pattern.name,
            height,
            width,
            rows,
            cols,
        });
    }

    let start_row = anchor_row.min(rows - height);
    let start_col = anchor_col.min(cols - width);

    let mut grid = Grid::new(rows, cols);
    for row in 0..height {
        for col in 0..width {
            if pattern.is_alive(row, col) {
                *grid.at_mut(start_row + row, start_col + col) = Cell::alive(team);
            }
        }
    }
    Ok(grid)
}

/// Merge `overlay` onto `base`, overlay-alive cells winning.
///
/// For every coordinate the result holds the overlay's cell if it is
/// alive, otherwise the base's cell: a stamp can only add live cells,
/// never erase existing ones. Fails with `DimensionMismatch` unless both
/// grids have identical dimensions.
pub fn merge(overlay: &Grid, base: &Grid) -> Result<Grid, EngineError> {
    if overlay.rows() != base.rows() || overlay.cols() != base.cols() {
        return Err(EngineError::DimensionMismatch {
            overlay: (overlay.rows(), overlay.cols()),
            base: (base.rows(), base.cols()),
        });
    }

    let cells = overlay
        .cells()
        .zip(base.cells())
        .map(|(over, under)| if over.is_alive() { *over } else { *under })
        .collect();
    Ok(Grid::from_cells(base.rows(), base.cols(), cells))
}
