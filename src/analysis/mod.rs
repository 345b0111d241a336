// Exact enumeration and Monte Carlo estimation of the switch-strategy win rate
pub mod monte_carlo;
pub mod sample_space;
