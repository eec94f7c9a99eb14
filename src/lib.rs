pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{AdderArgs, GreeterArgs, ADDER_USAGE, GREETER_USAGE};
pub use core::{adder::Adder, greeter::Greeter, runner::Runner};
pub use utils::error::{CalcError, Result};
