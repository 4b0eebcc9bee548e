//! Anonymized game model.
//!
//! - [`Category`]: role × knowledge status, with its [`Role`] and [`Faction`]
//! - [`Population`]: living players per category, composed with [`Delta`]s
//! - [`GameState`]: day, [`Phase`], last guarded category, population
//! - [`Winner`]: win determination from a population

mod category;
mod phase;
mod population;
mod role;
mod state;
mod winner;

pub use category::*;
pub use phase::*;
pub use population::*;
pub use role::*;
pub use state::*;
pub use winner::*;
