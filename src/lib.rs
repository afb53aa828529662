//! Rank tasks by urgency, importance, effort and how many other tasks they
//! unblock, and detect circular dependencies between them.

pub mod config;
pub mod http;
pub mod logging;
pub mod output;
pub mod report;
pub mod scoring;
pub mod task;

pub use report::{analyze, matrix, suggest, AnalyzeReport, MatrixReport, Quadrant, SuggestReport};
pub use scoring::{compute, has_cycle, Strategy};
pub use task::{ScoredTask, Task};
