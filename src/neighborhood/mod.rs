//! Neighborhood operators.
//!
//! Randomized moves that turn one tour into a nearby candidate. The
//! search strategies are generic over [`NeighborhoodOperator`], so custom
//! moves can be plugged in next to the built-in [`Neighborhood`] kinds.
//!
//! # References
//!
//! - Croes, G.A. (1958). "A method for solving traveling salesman problems",
//!   *Operations Research* 6(6), 791-812.

mod operators;
mod types;

pub use operators::{swap, two_opt};
pub use types::{Neighborhood, NeighborhoodOperator};
