//! Game of Life engine with prefab stamps, team conquest and cycle detection.
//!
//! This crate provides a fixed-size grid of binary-state cells evolving
//! generation-by-generation under the classic birth/survival thresholds
//! over the 8-connected Moore neighborhood, with three extras on top of
//! the basic rule: a library of named prefab stamps with clamped
//! placement, an optional two-team ownership variant where newborn cells
//! inherit the majority team among their live neighbors, and detection of
//! runs that enter a previously-seen configuration.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and the built-in prefab library
//! - `engine`: Grid state, placement, the transition rule, cycle detection
//!   and the simulation controller
//!
//! Rendering, input handling and step scheduling are host concerns: the
//! engine is synchronous, performs no I/O, and is driven one
//! [`Simulation::step`] at a time at whatever cadence the host chooses.
//!
//! # Example
//!
//! ```rust
//! use gridlife::{PatternKey, Simulation, SimulationConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SimulationConfig {
//!     rows: 5,
//!     cols: 5,
//!     ..SimulationConfig::default()
//! };
//! let mut sim = Simulation::new(config)?;
//! sim.stamp(2, 1, PatternKey::Blinker, None)?;
//!
//! // A blinker oscillates with period two, so the run terminates as soon
//! // as a stepped generation repeats an observed one.
//! while !sim.step() {}
//! println!("repeat after {} generations", sim.generation());
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod schema;

// Re-export commonly used types
pub use engine::{
    Cell, CellState, EngineError, Grid, History, PopulationStats, Simulation, Team,
};
pub use schema::{
    ConfigError, Pattern, PatternCategory, PatternKey, SimulationConfig, StampConfig, pattern_keys,
};
