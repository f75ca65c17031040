//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that remembers recently
//! adopted tours (the tabu list) and refuses to return to them, so the
//! search keeps moving even when no neighbor improves.
//!
//! Tabu membership is a plain veto: there is no aspiration criterion, so
//! a listed tour is rejected even when it would be a new global best.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::TabuRunner;
