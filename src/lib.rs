// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::monte_carlo::{MonteCarloSimulator, SimulationReport, Strategy};
pub use analysis::sample_space::{SampleSpace, TheoreticalReport};
pub use config::SimulationConfig;
pub use domain::{Door, EventClass, Outcome, WeightedEvent};
pub use error::{Error, Result};
pub use ui::{MenuChoice, compute_sample_space, simulate_monte_carlo};
pub use utils::Fraction;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Menu selection (1 theoretical, 2 simulation, 3 event space). Prompts when omitted.
    #[arg(long)]
    pub selection: Option<String>,

    /// Trials per strategy for the simulation. Prompts when omitted.
    #[arg(long)]
    pub trials: Option<String>,

    /// Seed for a reproducible simulation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Spread simulation trials over all cores
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Also print the numeric result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
