//! Configuration module for the montyhall application.

// Can all be private now because we have a public re-export.
mod debug;
mod simulation;

// Public
pub mod constants;

// Re-export commonly used items
pub use debug::DF;
pub use simulation::SimulationConfig;
