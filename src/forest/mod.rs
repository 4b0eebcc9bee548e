mod forest;
mod leaf;
mod tree;

pub use forest::*;
pub use leaf::*;
pub use tree::*;
