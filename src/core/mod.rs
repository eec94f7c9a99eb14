pub mod adder;
pub mod arith;
pub mod greeter;
pub mod runner;

pub use crate::domain::ports::Program;
pub use crate::utils::error::Result;
