mod iter;
mod map;

pub use iter::*;
pub use map::*;
