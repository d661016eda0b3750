//! Generation transition: the neighbor-counting rule and team conquest.

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, Grid, Team};

/// The 8-connected Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
];

/// Live-neighbor tallies around one cell.
#[derive(Debug, Clone, Copy, Default)]
struct Census {
    alive: u8,
    blue: u8,
    red: u8,
}

/// Count live neighbors of (row, col). Neighbors beyond a grid edge are
/// simply absent; there is no wraparound.
fn census(grid: &Grid, row: usize, col: usize) -> Census {
    let mut census = Census::default();
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || c < 0 || r >= grid.rows() as isize || c >= grid.cols() as isize {
            continue;
        }
        let neighbor = grid.at(r as usize, c as usize);
        if neighbor.is_alive() {
            census.alive += 1;
            match neighbor.team {
                Some(Team::Blue) => census.blue += 1,
                Some(Team::Red) => census.red += 1,
                None => {}
            }
        }
    }
    census
}

/// Outcome of the rule for one cell.
enum NextCell {
    Settled(Cell),
    /// Newborn whose blue/red ancestry tied; the caller resolves the team.
    TieBorn,
}

fn transition_cell(cell: Cell, census: Census, team_mode: bool) -> NextCell {
    if census.alive < 2 || census.alive > 3 {
        return NextCell::Settled(Cell::DEAD);
    }
    if !cell.is_alive() && census.alive == 3 {
        if !team_mode {
            return NextCell::Settled(Cell::alive(None));
        }
        return match census.blue.cmp(&census.red) {
            std::cmp::Ordering::Greater => NextCell::Settled(Cell::alive(Some(Team::Blue))),
            std::cmp::Ordering::Less => NextCell::Settled(Cell::alive(Some(Team::Red))),
            std::cmp::Ordering::Equal => NextCell::TieBorn,
        };
    }
    // Survival keeps the cell as-is, team tag included; an uncovered dead
    // cell stays dead.
    NextCell::Settled(cell)
}

/// Compute the next generation of `grid`.
///
/// Every census is taken from the input snapshot and the result is a
/// freshly allocated grid, so no cell's transition can observe another
/// cell's next state within the same step. Birth ties are resolved through
/// `rng` in row-major order; a fixed seed reproduces the same grid.
pub fn next_generation<R: Rng>(grid: &Grid, team_mode: bool, rng: &mut R) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();

    // Phase one: apply the rule to every cell, rows in parallel.
    let scanned: Vec<Vec<NextCell>> = (0..rows)
        .into_par_iter()
        .map(|row| {
            (0..cols)
                .map(|col| transition_cell(grid.at(row, col), census(grid, row, col), team_mode))
                .collect()
        })
        .collect();

    // Phase two: settle tie births sequentially so the RNG draw order is
    // deterministic.
    let cells = scanned
        .into_iter()
        .flatten()
        .map(|next| match next {
            NextCell::Settled(cell) => cell,
            NextCell::TieBorn => {
                let team = if rng.gen_bool(0.5) {
                    Team::Blue
                } else {
                    Team::Red
                };
                Cell::alive(Some(team))
            }
        })
        .collect();

    Grid::from_cells(rows, cols, cells)
}
