mod distribution;
mod mass;
mod odds;
mod policy;

pub use distribution::*;
pub use mass::*;
pub use odds::*;
pub use policy::*;
