//! sim-runner: headless runner for the commission simulation.
//!
//! Usage:
//!   sim-runner --seed 42 --reps 500
//!   sim-runner --seed 42 --json

use anyhow::Result;
use commission_core::{
    commission::RateSchedule, config::SimConfig, generator::SimulationGenerator, rng::SimRng,
    trial::TrialSet,
};
use std::env;

const HEAD_ROWS: usize = 5;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let json_mode = args.iter().any(|a| a == "--json");

    let mut config = SimConfig::default();
    config.n_reps = parse_arg(&args, "--reps", config.n_reps);

    if !json_mode {
        println!("commission-sim: sim-runner");
        println!("  seed:  {seed}");
        println!("  reps:  {}", config.n_reps);
        println!();
    }

    let generator = SimulationGenerator::new(config, RateSchedule::default())?;
    let mut rng = SimRng::seed_from_u64(seed);
    let trials = generator.generate(&mut rng);
    log::info!("run complete: {} trials", trials.len());

    if json_mode {
        println!("{}", trials.head_json(HEAD_ROWS)?);
    } else {
        print_head(&trials);
    }
    Ok(())
}

fn print_head(trials: &TrialSet) {
    println!(
        "{:>4}  {:>14}  {:>16}  {:>14}  {:>15}  {:>17}",
        "", "sales_expected", "sales_percentage", "sales_actual", "commission_rate", "commission_amount"
    );
    for (i, t) in trials.head(HEAD_ROWS).iter().enumerate() {
        println!(
            "{i:>4}  {:>14.0}  {:>16.2}  {:>14.2}  {:>15.2}  {:>17.2}",
            t.target_sales, t.achievement_pct, t.actual_sales, t.commission_rate, t.commission_amount
        );
    }
    println!();
    println!("  {} trials generated", trials.len());
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
