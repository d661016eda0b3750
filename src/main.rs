//! Game of Life CLI - Run simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use gridlife::{PatternKey, Simulation, SimulationConfig, StampConfig, Team};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  steps        Maximum number of generations (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    println!("Game of Life");
    println!("============");
    println!(
        "Grid: {}x{}{}",
        config.rows,
        config.cols,
        if config.team_mode { " (team mode)" } else { "" }
    );
    println!("Max steps: {}", steps);
    println!();

    let stamps = config.stamps.clone();
    let density = config.density;

    let mut sim = Simulation::new(config).unwrap_or_else(|e| {
        eprintln!("Error in configuration: {}", e);
        std::process::exit(1);
    });

    // Seed: configured stamps when present, random fill otherwise.
    if stamps.is_empty() {
        sim.seed_random(density).unwrap_or_else(|e| {
            eprintln!("Error in configuration: {}", e);
            std::process::exit(1);
        });
        println!("Seeded randomly at density {}", density);
    } else {
        for stamp in &stamps {
            sim.stamp_named(stamp.row, stamp.col, &stamp.pattern, stamp.team)
                .unwrap_or_else(|e| {
                    eprintln!("Error applying stamp: {}", e);
                    std::process::exit(1);
                });
        }
        println!("Applied {} configured stamps", stamps.len());
    }

    let initial = sim.stats();
    println!("Initial population: {}", initial.alive);
    if sim.config().team_mode {
        println!("  Blue: {}  Red: {}", initial.blue, initial.red);
    }
    println!();

    // Run simulation
    println!("Running simulation...");
    let start = Instant::now();
    sim.start();

    let mut completed = 0u64;
    for i in 0..steps {
        let done = sim.step();
        completed = i + 1;

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 || done {
            let stats = sim.stats();
            let elapsed = start.elapsed().as_secs_f32();
            let steps_per_sec = completed as f32 / elapsed;
            println!(
                "  Generation {}: population={}, {:.1} steps/s",
                sim.generation(),
                stats.alive,
                steps_per_sec
            );
        }

        if done {
            break;
        }
    }

    let elapsed = start.elapsed();
    let final_stats = sim.stats();

    println!();
    if sim.is_done() {
        println!(
            "Simulation done: generation {} repeats an earlier configuration.",
            sim.generation()
        );
    } else {
        println!("Still evolving after {} generations.", sim.generation());
    }
    println!("Final population: {}", final_stats.alive);
    if sim.config().team_mode {
        println!(
            "  Blue: {}  Red: {}",
            final_stats.blue, final_stats.red
        );
    }
    println!(
        "Time: {:.2}s ({:.1} steps/s)",
        elapsed.as_secs_f32(),
        completed as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = SimulationConfig::default();

    let team_config = SimulationConfig {
        rows: 11,
        cols: 22,
        team_mode: true,
        rng_seed: Some(7),
        stamps: vec![
            StampConfig {
                row: 2,
                col: 0,
                pattern: PatternKey::QueenBeeShuttle.name().to_owned(),
                team: Some(Team::Blue),
            },
            StampConfig {
                row: 8,
                col: 16,
                pattern: PatternKey::Glider.name().to_owned(),
                team: Some(Team::Red),
            },
        ],
        ..SimulationConfig::default()
    };

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example team-conquest configuration with stamps:");
    println!("{}", serde_json::to_string_pretty(&team_config).unwrap());
}
