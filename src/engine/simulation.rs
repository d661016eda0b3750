//! Simulation controller: the façade composing grid, placement, transition
//! and history.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::schema::{ConfigError, PatternKey, SimulationConfig};

use super::{Cell, EngineError, Grid, History, Team, merge, next_generation, project};

/// Alive-cell tallies, overall and per team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub alive: usize,
    pub blue: usize,
    pub red: usize,
}

impl PopulationStats {
    /// Tally a grid with a full scan.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut stats = Self {
            alive: 0,
            blue: 0,
            red: 0,
        };
        for cell in grid.cells() {
            if cell.is_alive() {
                stats.alive += 1;
                match cell.team {
                    Some(Team::Blue) => stats.blue += 1,
                    Some(Team::Red) => stats.red += 1,
                    None => {}
                }
            }
        }
        stats
    }
}

/// The simulation controller.
///
/// Owns the current grid, the generation counter and the run history.
/// Stepping is host-driven; `start`/`stop` only toggle the running guard
/// the host checks before invoking [`step`](Simulation::step) again.
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    history: History,
    generation: u64,
    running: bool,
    done: bool,
    rng: StdRng,
}

impl Simulation {
    /// Create an idle simulation with an all-dead grid of the configured
    /// dimensions.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::new(config.rows, config.cols);
        Ok(Self {
            config,
            grid,
            history: History::new(),
            generation: 0,
            running: false,
            done: false,
            rng,
        })
    }

    /// Replace the grid with an all-dead one and forget the run.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.rows, self.config.cols);
        self.history.reset();
        self.generation = 0;
        self.done = false;
        self.running = false;
        debug!(
            "reset to an all-dead {}x{} grid",
            self.config.rows, self.config.cols
        );
    }

    /// Refill the grid, each cell independently alive with probability
    /// `density` and, in team mode, tagged blue or red with equal
    /// probability. Starts a fresh run.
    pub fn seed_random(&mut self, density: f64) -> Result<(), ConfigError> {
        if !density.is_finite() || !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::InvalidDensity { density });
        }
        let mut grid = Grid::new(self.config.rows, self.config.cols);
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                if self.rng.gen_bool(density) {
                    let team = self.config.team_mode.then(|| {
                        if self.rng.gen_bool(0.5) {
                            Team::Blue
                        } else {
                            Team::Red
                        }
                    });
                    *grid.at_mut(row, col) = Cell::alive(team);
                }
            }
        }
        self.grid = grid;
        self.history.reset();
        self.generation = 0;
        self.done = false;
        self.running = false;
        debug!("seeded random grid at density {density}");
        Ok(())
    }

    /// Stamp a prefab onto the current grid, pattern-alive cells winning
    /// over the existing cells. The generation counter and run history are
    /// untouched.
    pub fn stamp(
        &mut self,
        anchor_row: usize,
        anchor_col: usize,
        key: PatternKey,
        team: Option<Team>,
    ) -> Result<&Grid, EngineError> {
        let overlay = project(
            key.pattern(),
            self.config.rows,
            self.config.cols,
            anchor_row,
            anchor_col,
            team,
        )?;
        self.grid = merge(&overlay, &self.grid)?;
        debug!("stamped {} at ({anchor_row}, {anchor_col})", key.name());
        Ok(&self.grid)
    }

    /// String-keyed [`stamp`](Simulation::stamp) for callers resolving
    /// pattern names at runtime.
    pub fn stamp_named(
        &mut self,
        anchor_row: usize,
        anchor_col: usize,
        name: &str,
        team: Option<Team>,
    ) -> Result<&Grid, EngineError> {
        let key = PatternKey::from_name(name).ok_or_else(|| EngineError::UnknownPattern {
            name: name.to_owned(),
        })?;
        self.stamp(anchor_row, anchor_col, key, team)
    }

    /// The cells a stamp at this anchor would turn alive, as a grid of the
    /// configured dimensions. Pure; simulation state is untouched, so this
    /// can back a hover preview on every pointer move.
    pub fn preview(
        &self,
        anchor_row: usize,
        anchor_col: usize,
        key: PatternKey,
        team: Option<Team>,
    ) -> Result<Grid, EngineError> {
        project(
            key.pattern(),
            self.config.rows,
            self.config.cols,
            anchor_row,
            anchor_col,
            team,
        )
    }

    /// Advance one generation; no-op once the simulation is done.
    ///
    /// Returns the done flag: `true` when the new generation exactly
    /// repeats one already observed since the last reset or seed.
    pub fn step(&mut self) -> bool {
        if self.done {
            return true;
        }
        self.grid = next_generation(&self.grid, self.config.team_mode, &mut self.rng);
        self.generation += 1;
        if self.history.observe(&self.grid) {
            self.done = true;
            self.running = false;
            info!(
                "repeat configuration at generation {}; simulation done",
                self.generation
            );
        } else {
            debug!("generation {} computed", self.generation);
        }
        self.done
    }

    /// Mark the simulation running. A finished run stays done until the
    /// host reseeds; only the guard flag is re-armed.
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Read-only view of the current grid, for rendering.
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    /// Generations stepped since the last reset or seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current alive tallies, overall and per team.
    pub fn stats(&self) -> PopulationStats {
        PopulationStats::from_grid(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: usize, cols: usize) -> SimulationConfig {
        SimulationConfig {
            rows,
            cols,
            rng_seed: Some(99),
            ..SimulationConfig::default()
        }
    }

    fn team_config(rows: usize, cols: usize) -> SimulationConfig {
        SimulationConfig {
            team_mode: true,
            ..config(rows, cols)
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sim = Simulation::new(config(6, 8)).unwrap();
        sim.seed_random(0.5).unwrap();
        sim.stamp(0, 0, PatternKey::Glider, None).unwrap();
        sim.step();
        sim.start();

        for _ in 0..2 {
            sim.reset();
            assert_eq!(sim.snapshot(), &Grid::new(6, 8));
            assert_eq!(sim.generation(), 0);
            assert!(!sim.is_done());
            assert!(!sim.is_running());
        }
    }

    #[test]
    fn test_blinker_run_terminates() {
        let mut sim = Simulation::new(config(5, 5)).unwrap();
        sim.stamp(2, 1, PatternKey::Blinker, None).unwrap();
        sim.start();

        // Vertical, then horizontal, then vertical again: the first
        // configuration seen twice among the stepped generations.
        assert!(!sim.step());
        assert!(!sim.step());
        assert!(sim.step());
        assert_eq!(sim.generation(), 3);
        assert!(sim.is_done());
        assert!(!sim.is_running());

        // Done: stepping is a no-op.
        assert!(sim.step());
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn test_still_life_terminates_quickly() {
        let mut sim = Simulation::new(config(6, 6)).unwrap();
        sim.stamp(2, 2, PatternKey::Beehive, None).unwrap();
        assert!(!sim.step());
        assert!(sim.step());
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_stamp_merges_without_erasing() {
        let mut sim = Simulation::new(config(5, 5)).unwrap();
        sim.stamp(2, 1, PatternKey::Blinker, None).unwrap();
        sim.stamp(2, 2, PatternKey::Point, None).unwrap();
        assert_eq!(sim.stats().alive, 3);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_stamp_clamped_at_far_corner() {
        let mut sim = Simulation::new(config(10, 10)).unwrap();
        sim.stamp(9, 9, PatternKey::Glider, None).unwrap();
        let grid = sim.snapshot();
        assert_eq!(grid.alive_count(), 5);
        assert!(grid.get(9, 9).unwrap().is_alive());
    }

    #[test]
    fn test_stamp_named_unknown_pattern() {
        let mut sim = Simulation::new(config(5, 5)).unwrap();
        let err = sim.stamp_named(0, 0, "acorn", None).unwrap_err();
        assert!(matches!(err, EngineError::UnknownPattern { name } if name == "acorn"));
    }

    #[test]
    fn test_preview_leaves_state_untouched() {
        let sim = Simulation::new(config(5, 5)).unwrap();
        let preview = sim.preview(2, 2, PatternKey::Glider, None).unwrap();
        assert_eq!(preview.alive_count(), 5);
        assert_eq!(sim.snapshot().alive_count(), 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_seed_density_extremes() {
        let mut sim = Simulation::new(config(8, 8)).unwrap();
        sim.seed_random(0.0).unwrap();
        assert_eq!(sim.stats().alive, 0);
        sim.seed_random(1.0).unwrap();
        assert_eq!(sim.stats().alive, 64);
        assert!(sim.snapshot().cells().all(|cell| cell.team.is_none()));
    }

    #[test]
    fn test_seed_rejects_bad_density() {
        let mut sim = Simulation::new(config(4, 4)).unwrap();
        assert!(matches!(
            sim.seed_random(1.5),
            Err(ConfigError::InvalidDensity { .. })
        ));
        assert!(sim.seed_random(f64::NAN).is_err());
    }

    #[test]
    fn test_team_seed_tags_every_alive_cell() {
        let mut sim = Simulation::new(team_config(8, 8)).unwrap();
        sim.seed_random(1.0).unwrap();
        assert!(sim.snapshot().cells().all(|cell| cell.team.is_some()));

        let stats = sim.stats();
        assert_eq!(stats.blue + stats.red, 64);
        assert!(stats.blue > 0 && stats.red > 0);
    }

    #[test]
    fn test_stats_tally_per_team() {
        let mut sim = Simulation::new(team_config(6, 6)).unwrap();
        sim.stamp(0, 0, PatternKey::Beehive, Some(Team::Blue)).unwrap();
        sim.stamp(3, 0, PatternKey::Point, Some(Team::Red)).unwrap();
        let stats = sim.stats();
        assert_eq!(stats.alive, 7);
        assert_eq!(stats.blue, 6);
        assert_eq!(stats.red, 1);
    }

    #[test]
    fn test_start_stop_toggle() {
        let mut sim = Simulation::new(config(4, 4)).unwrap();
        assert!(!sim.is_running());
        sim.start();
        assert!(sim.is_running());
        sim.stop();
        assert!(!sim.is_running());
    }

    #[test]
    fn test_fixed_seed_runs_identically() {
        let mut a = Simulation::new(team_config(12, 12)).unwrap();
        let mut b = Simulation::new(team_config(12, 12)).unwrap();
        a.seed_random(0.4).unwrap();
        b.seed_random(0.4).unwrap();
        for _ in 0..10 {
            a.step();
            b.step();
        }
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.generation(), b.generation());
    }
}
