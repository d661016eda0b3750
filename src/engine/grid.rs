//! Grid data model: cell records and the rectangular cell container.

use serde::{Deserialize, Serialize};

use super::EngineError;

/// Life state of a single cell.
///
/// Transient display annotations (hovered, fading) belong to the
/// presentation layer; the engine only distinguishes dead from alive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

/// Ownership tag for the team-conquest variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Blue,
    Red,
}

/// A single cell record.
///
/// `team` is only ever `Some` on an alive cell in team mode; a cell that
/// dies loses its tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

impl Cell {
    pub const DEAD: Cell = Cell {
        state: CellState::Dead,
        team: None,
    };

    /// An alive cell carrying the given ownership tag.
    pub fn alive(team: Option<Team>) -> Self {
        Self {
            state: CellState::Alive,
            team,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == CellState::Alive
    }
}

/// Fixed-size rectangular container of cells.
///
/// Row-major flat storage with zero-based (row, col) coordinates,
/// `row in [0, rows)`, `col in [0, cols)`. Dimensions are fixed at
/// construction; zero-row or zero-column grids are legal and empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::DEAD; rows * cols],
        }
    }

    /// Build a grid from row-major cell storage.
    ///
    /// Internal constructor; `cells.len()` must equal `rows * cols`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert (row, col) coordinates to flat index.
    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at (row, col), `OutOfBounds` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        if !self.contains(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(self.cells[self.idx(row, col)])
    }

    /// Replace the cell at (row, col), `OutOfBounds` outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), EngineError> {
        if !self.contains(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        let idx = self.idx(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Cell at (row, col). Internal access for coordinates already known to
    /// be in bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.idx(row, col);
        &mut self.cells[idx]
    }

    /// Row-major iteration over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> EngineError {
        EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}
