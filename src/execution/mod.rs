//! Run orchestration

pub mod runner;

pub use runner::{RunResult, run};
