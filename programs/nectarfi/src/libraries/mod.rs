pub use mul_div::*;

pub mod mul_div;
