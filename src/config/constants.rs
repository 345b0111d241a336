// Top Level Constants

/// Trials run when the caller does not ask for a specific count.
pub const DEFAULT_TRIALS: u64 = 100_000;

/// Largest denominator allowed in the reported theoretical fraction.
pub const MAX_DENOMINATOR: u64 = 9;

/// Exact probability that switching wins: 2/3.
pub const SWITCH_WIN_NUMERATOR: u64 = 2;
pub const SWITCH_WIN_DENOMINATOR: u64 = 3;
pub const THEORETICAL_SWITCH_WIN: f64 = SWITCH_WIN_NUMERATOR as f64 / SWITCH_WIN_DENOMINATOR as f64;

pub mod output {
    /// Decimals on win-rate percentages.
    pub const RATE_DECIMALS: usize = 3;
    /// Decimals on the deviation from 2/3.
    pub const DEVIATION_DECIMALS: usize = 5;
}

pub mod parallel {
    /// Trials per rayon work item. Each chunk owns one RNG stream.
    pub const CHUNK_SIZE: u64 = 10_000;
}

pub mod confidence {
    /// Two-sided confidence level for the switch-rate interval.
    pub const LEVEL: f64 = 0.95;
}

pub mod convergence {
    /// Trial counts swept by the `convergence` binary.
    pub const TRIAL_LADDER: &[u64] = &[
        100, 1_000, 10_000, 100_000, 1_000_000,
    ];
}
