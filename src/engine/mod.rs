//! Engine module - Grid state, pattern placement, generation transition and
//! cycle detection.

mod grid;
mod history;
mod placement;
mod simulation;
mod transition;

pub use grid::*;
pub use history::*;
pub use placement::*;
pub use simulation::*;
pub use transition::*;

/// Engine operation errors.
///
/// All variants are local, synchronous and recoverable; with correct
/// coordinate/key derivation on the caller side they are unreachable.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Coordinate ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Unknown pattern {name:?}")]
    UnknownPattern { name: String },
    #[error("Pattern {name:?} ({height}x{width}) does not fit a {rows}x{cols} grid")]
    PatternTooLarge {
        name: &'static str,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Grid dimensions {overlay:?} and {base:?} do not match")]
    DimensionMismatch {
        overlay: (usize, usize),
        base: (usize, usize),
    },
}
