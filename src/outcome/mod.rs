//! Outcome generation.
//!
//! Pure functions from a [`GameState`](crate::GameState) to every
//! `(key, successor)` pair reachable in its phase:
//! - [`daybreak`]: reveal or eliminate
//! - [`nightfall`]: kill × peek × guard, with [`Overlap`] sub-cases

mod action;
mod day;
mod night;
mod outcome;
mod overlap;

pub use action::*;
pub use day::*;
pub use night::*;
pub use outcome::*;
pub use overlap::*;
