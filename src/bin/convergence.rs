//! Convergence sweep: runs the simulator at growing trial counts and prints how
//! far the switch rate sits from 2/3 at each step.
//!
//! Every step uses the same base seed, so reruns print the same table.

use anyhow::Result;
use clap::Parser;
use montyhall::{
    MonteCarloSimulator,
    config::constants::{THEORETICAL_SWITCH_WIN, convergence::TRIAL_LADDER, parallel::CHUNK_SIZE},
    ui::format_count,
};
use tabled::{Table, Tabled, settings::Style};

#[derive(Parser, Debug)]
#[command(about = "Switch-rate convergence towards 2/3")]
struct Args {
    /// Base seed for every step
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Tabled)]
struct Row {
    trials: String,
    stay: String,
    switch: String,
    deviation: String,
    std_error: String,
    #[tabled(rename = "2/3 in 95% CI")]
    covered: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Convergence sweep over {:?} (seed {})", TRIAL_LADDER, args.seed);

    let mut rows = Vec::with_capacity(TRIAL_LADDER.len());
    for &trials in TRIAL_LADDER {
        let report = MonteCarloSimulator::run_parallel(trials, args.seed, CHUNK_SIZE)?;
        let ci = report.switch_interval();
        rows.push(Row {
            trials: format_count(trials),
            stay: format!("{:.3}%", report.stay_rate() * 100.0),
            switch: format!("{:.3}%", report.switch_rate() * 100.0),
            deviation: format!("{:+.5}", report.switch_deviation()),
            std_error: format!("{:.5}", ci.standard_error),
            covered: ci.contains(THEORETICAL_SWITCH_WIN),
        });
    }

    println!("{}", Table::new(rows).with(Style::modern()));
    Ok(())
}
