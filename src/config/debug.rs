//! Debugging feature flags.

pub struct LogFlags {
    /// Log every weighted event as it is assigned.
    pub log_weighted_events: bool,

    /// Log per-chunk tallies in parallel simulation runs.
    pub log_chunks: bool,

    /// Activate trace_time macro (scope-level timing)
    pub log_performance: bool,

    /// Log the seed picked for unseeded runs (so they can be replayed).
    pub log_seed: bool,
}

pub const DF: LogFlags = LogFlags {
    log_seed: true,

    log_performance: true,

    log_weighted_events: false,
    log_chunks: false,
};
