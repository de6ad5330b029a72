//! Puzzle solvers.
//!
//! Solvers receive input text that has already been resolved by the caller.
//! They never read or write the cache.

pub mod error;
pub mod solver;
pub mod y2023;
pub mod y2024;

pub use error::PuzzleError;
pub use solver::{Answer, Solver, solver_for};
