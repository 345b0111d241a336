// Domain types and value objects
mod door;
mod outcome;

// Re-export commonly used types to the world
pub use door::Door;
pub use outcome::{EventClass, Outcome, WeightedEvent};
