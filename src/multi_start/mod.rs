//! Multi-start hill climbing.
//!
//! Repeats independent hill-climbing runs from fresh random tours and
//! keeps the best result, trading effort for diversification.

mod config;
mod runner;

pub use config::MultiStartConfig;
pub use runner::MultiStartRunner;
