mod informed;
mod naive;
mod share;
mod uniform;

pub use informed::*;
pub use naive::*;
pub use share::*;
pub use uniform::*;
