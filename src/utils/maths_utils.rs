use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

/// Wins over trials. Zero trials gives 0.0 rather than NaN.
#[inline]
pub fn rate(wins: u64, trials: u64) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    wins as f64 / trials as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub level: f64,
    pub standard_error: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Normal-approximation (Wald) interval for a binomial proportion.
///
/// Bounds are clamped to [0, 1]. `level` is two-sided, e.g. 0.95.
pub fn binomial_interval(wins: u64, trials: u64, level: f64) -> ConfidenceInterval {
    let p = rate(wins, trials);
    let standard_error = if trials == 0 {
        0.0
    } else {
        (p * (1.0 - p) / trials as f64).sqrt()
    };

    // Standard normal; parameters are constant so construction cannot fail.
    let z = match Normal::new(0.0, 1.0) {
        Ok(normal) => normal.inverse_cdf(0.5 + level / 2.0),
        Err(_) => 0.0,
    };

    let half_width = z * standard_error;
    ConfidenceInterval {
        level,
        standard_error,
        lower: (p - half_width).max(0.0),
        upper: (p + half_width).min(1.0),
    }
}
