//! Shortest-path solver for generalized river-crossing puzzles.
//!
//! A puzzle places N named items on the two banks of a river. Item 0 is
//! the ferry operator, who takes part in every crossing and can bring at
//! most one other item along. Given a source configuration, a target
//! configuration, and a set of forbidden configurations that must never
//! be visited, the solver finds a shortest sequence of crossings
//! connecting the two, or reports that none exists.

pub mod datagen;
pub mod error;
pub mod loader;
pub mod moves;
pub mod puzzle;
pub mod solver;
pub mod state;

// Re-export main types
pub use error::{LoadError, PuzzleError};
pub use moves::{Direction, Move};
pub use puzzle::{Puzzle, Roster};
pub use solver::{find_shortest_path, SearchStats, Solution};
pub use state::State;
