#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

//! Solver for the fifteen puzzle with wraparound moves: on top of the usual
//! slides, a blank on the border may swap with the cell on the opposite
//! border of its row or column.

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use console as _;
use humantime as _;
use tracing_subscriber as _;

pub mod config;
mod error;
pub mod parsers;
pub mod search;

pub use config::SolverConfig;
pub use error::PuzzleError;

#[cfg(test)]
mod test_utils;
