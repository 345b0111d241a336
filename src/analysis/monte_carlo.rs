//! Monte Carlo estimate of the stay and switch win rates.
//!
//! Every trial draws the prize door and the first pick independently and
//! uniformly. Trials share no state, so the parallel runner splits them into
//! fixed-size chunks, gives each chunk its own `SmallRng` seeded by
//! [`chunk_seed`], and sums the tallies. The totals for a given
//! (trials, seed, chunk_size) do not depend on the rayon thread count.

use {
    crate::{
        config::{
            DF, SimulationConfig,
            constants::{THEORETICAL_SWITCH_WIN, confidence},
        },
        domain::Door,
        error::{Error, Result},
        utils::{ConfidenceInterval, binomial_interval, rate},
    },
    rand::{Rng, SeedableRng, rngs::SmallRng},
    rayon::prelude::*,
    serde::Serialize,
    std::ops::Add,
    strum_macros::{Display, EnumIter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
pub enum Strategy {
    #[strum(to_string = "Stay")]
    Stay,
    #[strum(to_string = "Switch")]
    Switch,
}

/// Staying wins iff the first pick was the prize.
pub fn stay_wins(prize: Door, initial_choice: Door) -> bool {
    prize == initial_choice
}

/// Where the player ends up after the host opens a losing door and the player
/// switches.
///
/// A wrong first pick leaves exactly one closed door besides the player's, and
/// it hides the prize. A correct first pick means the remaining closed door is
/// a loser; that case is `None`.
pub fn switch_final_choice(prize: Door, initial_choice: Door) -> Option<Door> {
    (prize != initial_choice).then_some(prize)
}

pub fn switch_wins(prize: Door, initial_choice: Door) -> bool {
    switch_final_choice(prize, initial_choice) == Some(prize)
}

pub fn stay_trial<R: Rng + ?Sized>(rng: &mut R) -> bool {
    let prize = Door::random(rng);
    let initial_choice = Door::random(rng);
    stay_wins(prize, initial_choice)
}

pub fn switch_trial<R: Rng + ?Sized>(rng: &mut R) -> bool {
    let prize = Door::random(rng);
    let initial_choice = Door::random(rng);
    switch_wins(prize, initial_choice)
}

/// Seed for chunk `index` of a parallel run. The index is spread by the
/// golden-ratio constant so nearby base seeds do not share chunk streams.
pub fn chunk_seed(seed: u64, index: u64) -> u64 {
    seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    trials: u64,
    stay_wins: u64,
    switch_wins: u64,
}

impl Tally {
    fn run<R: Rng + ?Sized>(trials: u64, rng: &mut R) -> Self {
        let mut tally = Tally {
            trials,
            ..Default::default()
        };
        for _ in 0..trials {
            tally.stay_wins += u64::from(stay_trial(rng));
            tally.switch_wins += u64::from(switch_trial(rng));
        }
        tally
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            trials: self.trials + rhs.trials,
            stay_wins: self.stay_wins + rhs.stay_wins,
            switch_wins: self.switch_wins + rhs.switch_wins,
        }
    }
}

/// Aggregate counts for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub trials: u64,
    pub stay_wins: u64,
    pub switch_wins: u64,
    /// Seed the run was driven from, when known.
    pub seed: Option<u64>,
}

impl SimulationReport {
    fn from_tally(tally: Tally, seed: Option<u64>) -> Self {
        Self {
            trials: tally.trials,
            stay_wins: tally.stay_wins,
            switch_wins: tally.switch_wins,
            seed,
        }
    }

    pub fn wins(&self, strategy: Strategy) -> u64 {
        match strategy {
            Strategy::Stay => self.stay_wins,
            Strategy::Switch => self.switch_wins,
        }
    }

    /// Win fraction for `strategy`. Zero trials gives 0.0.
    pub fn rate(&self, strategy: Strategy) -> f64 {
        rate(self.wins(strategy), self.trials)
    }

    pub fn stay_rate(&self) -> f64 {
        rate(self.stay_wins, self.trials)
    }

    pub fn switch_rate(&self) -> f64 {
        rate(self.switch_wins, self.trials)
    }

    /// Empirical switch rate minus 2/3. Signed.
    pub fn switch_deviation(&self) -> f64 {
        self.switch_rate() - THEORETICAL_SWITCH_WIN
    }

    pub fn switch_interval(&self) -> ConfidenceInterval {
        binomial_interval(self.switch_wins, self.trials, confidence::LEVEL)
    }
}

pub struct MonteCarloSimulator;

impl MonteCarloSimulator {
    /// Runs `trials` stay trials and `trials` switch trials on the caller's RNG,
    /// interleaved one of each per iteration.
    pub fn run<R: Rng + ?Sized>(trials: u64, rng: &mut R) -> Result<SimulationReport> {
        if trials == 0 {
            return Err(Error::InvalidTrialCount(trials.to_string()));
        }
        Ok(SimulationReport::from_tally(Tally::run(trials, rng), None))
    }

    /// Chunked run on the rayon pool. Deterministic for a given
    /// (trials, seed, chunk_size).
    pub fn run_parallel(trials: u64, seed: u64, chunk_size: u64) -> Result<SimulationReport> {
        if trials == 0 {
            return Err(Error::InvalidTrialCount(trials.to_string()));
        }
        let chunk_size = chunk_size.max(1);
        let chunks = trials.div_ceil(chunk_size);
        log::debug!(
            "parallel run: {} trials in {} chunks of {}",
            trials,
            chunks,
            chunk_size
        );

        let tally = (0..chunks)
            .into_par_iter()
            .map(|i| {
                let len = chunk_size.min(trials - i * chunk_size);
                let mut rng = SmallRng::seed_from_u64(chunk_seed(seed, i));
                let tally = Tally::run(len, &mut rng);
                if DF.log_chunks {
                    log::info!("chunk {}: {:?}", i, tally);
                }
                tally
            })
            .reduce(Tally::default, |a, b| a + b);

        Ok(SimulationReport::from_tally(tally, Some(seed)))
    }

    /// Runs according to `config`, drawing a seed from OS entropy when none is set.
    pub fn run_with_config(config: &SimulationConfig) -> Result<SimulationReport> {
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                if DF.log_seed {
                    log::info!("no seed given, using {} (pass --seed {} to replay)", seed, seed);
                }
                seed
            }
        };

        log::info!(
            "Running simulation: {} trials, seed {}, parallel {}",
            config.trials(),
            seed,
            config.parallel
        );

        crate::trace_time!("monte_carlo", 500_000, {
            if config.parallel {
                Self::run_parallel(config.trials(), seed, config.chunk_size)
            } else {
                let mut rng = SmallRng::seed_from_u64(seed);
                Self::run(config.trials(), &mut rng).map(|r| SimulationReport {
                    seed: Some(seed),
                    ..r
                })
            }
        })
    }
}
