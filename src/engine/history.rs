//! Cycle detection over canonical grid serializations.

use std::collections::HashSet;

use super::{CellState, Grid, Team};

/// Record of every generation observed since the last reset.
///
/// Detection is byte-exact: two generations match only if every cell's
/// state and team agree; rotations and reflections are distinct states.
/// The whole run participates in the membership check, so storage grows
/// with the number of generations.
#[derive(Debug, Default)]
pub struct History {
    seen: HashSet<String>,
    generations: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of generations recorded since the last reset.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Record `grid`, reporting whether this exact configuration has
    /// already been observed in the current run.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let canonical = canonicalize(grid);
        let repeat = !self.seen.insert(canonical.clone());
        self.generations.push(canonical);
        repeat
    }

    /// Forget all recorded generations. Must be called whenever the grid
    /// is replaced outside of normal stepping.
    pub fn reset(&mut self) {
        self.seen.clear();
        self.generations.clear();
    }
}

/// Order-preserving, complete encoding of a grid: the dimensions followed
/// by one char per cell, row-major.
fn canonicalize(grid: &Grid) -> String {
    let mut out = format!("{}x{}:", grid.rows(), grid.cols());
    out.reserve(grid.rows() * grid.cols());
    for cell in grid.cells() {
        out.push(match (cell.state, cell.team) {
            (CellState::Dead, _) => '.',
            (CellState::Alive, None) => 'o',
            (CellState::Alive, Some(Team::Blue)) => 'b',
            (CellState::Alive, Some(Team::Red)) => 'r',
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Cell;

    #[test]
    fn test_first_observation_is_new() {
        let mut history = History::new();
        assert!(!history.observe(&Grid::new(3, 3)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_repeat_detected() {
        let mut history = History::new();
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::alive(None)).unwrap();

        assert!(!history.observe(&grid));
        assert!(!history.observe(&Grid::new(3, 3)));
        assert!(history.observe(&grid));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_team_participates_in_identity() {
        let mut history = History::new();
        let mut blue = Grid::new(2, 2);
        blue.set(0, 0, Cell::alive(Some(Team::Blue))).unwrap();
        let mut red = Grid::new(2, 2);
        red.set(0, 0, Cell::alive(Some(Team::Red))).unwrap();
        let mut untagged = Grid::new(2, 2);
        untagged.set(0, 0, Cell::alive(None)).unwrap();

        assert!(!history.observe(&blue));
        assert!(!history.observe(&red));
        assert!(!history.observe(&untagged));
        assert!(history.observe(&blue));
    }

    #[test]
    fn test_reset_forgets_everything() {
        let mut history = History::new();
        let grid = Grid::new(4, 4);
        assert!(!history.observe(&grid));
        history.reset();
        assert!(history.is_empty());
        assert!(!history.observe(&grid));
    }
}
