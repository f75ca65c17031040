//! Hill climbing.
//!
//! Samples a batch of neighbors each iteration and only ever moves to a
//! strictly cheaper tour. Two acceptance policies are provided:
//! best-improvement scans the whole batch, first-improvement stops at the
//! first cheaper candidate.

mod config;
mod runner;

pub use config::{HillClimbingConfig, Improvement};
pub use runner::HillClimbingRunner;
