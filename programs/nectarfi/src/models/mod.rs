pub use vault::*;
pub use yields::*;

pub mod fees;
pub mod vault;
pub mod yields;
