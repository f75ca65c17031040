//! Local search heuristics for the symmetric Traveling Salesman Problem.
//!
//! Given a dense distance matrix, every strategy searches for a short
//! tour (a Hamiltonian cycle) by repeatedly sampling random neighbors:
//!
//! - **Hill Climbing**: best- or first-improvement over a sampled batch.
//! - **Multi-Start**: independent hill-climbing restarts, best kept.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with pluggable
//!   cooling schedules.
//! - **Tabu Search (TS)**: best non-tabu neighbor, with a bounded FIFO of
//!   recently adopted tours.
//!
//! Neighbors come from a [`neighborhood::NeighborhoodOperator`]; the
//! built-in ones are swap and a random 2-opt segment reversal.
//!
//! # Architecture
//!
//! The [`distance::DistanceMatrix`] is validated once and read-only
//! afterwards, so it can be shared between concurrent runs. Each run owns
//! its tour, its RNG and its tabu list, and reports a [`SearchResult`]
//! with `tested` (candidates evaluated) and `explored` (moves accepted)
//! counters. The [`experiment`] module runs batches of trials for
//! benchmarking.

pub mod distance;
pub mod error;
pub mod experiment;
pub mod hill_climbing;
pub mod multi_start;
pub mod neighborhood;
pub mod sa;
pub mod tabu;
pub mod tour;

mod result;
mod strategy;

pub use error::{TspError, TspResult};
pub use result::SearchResult;
pub use strategy::Strategy;
pub use tour::Tour;
