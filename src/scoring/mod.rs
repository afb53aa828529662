pub mod cycle;
pub mod engine;
pub mod factors;
pub mod strategy;

pub use cycle::has_cycle;
pub use engine::{blocked_counts, compute, SubScores};
pub use factors::urgency_text;
pub use strategy::{Strategy, Weights};
