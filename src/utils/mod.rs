mod fraction;
mod maths_utils;
mod perf;

pub use fraction::Fraction;

pub use maths_utils::{ConfidenceInterval, binomial_interval, rate};
