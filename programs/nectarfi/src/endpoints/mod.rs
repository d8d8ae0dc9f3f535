pub use check_yields::*;
pub use deposit::*;
pub use initialize::*;
pub use withdraw::*;

pub mod check_yields;
pub mod deposit;
pub mod initialize;
pub mod withdraw;
