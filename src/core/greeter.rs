use crate::config::{GreeterArgs, GREETER_USAGE};
use crate::core::arith::sum;
use crate::core::{Program, Result};
use crate::utils::error::CalcError;
use crate::utils::validation::Validate;
use std::io::Write;

pub const FIRST_OPERAND: i32 = 5;
pub const SECOND_OPERAND: i32 = 14;

/// Prints the fixed sum, then greets the first name given.
pub struct Greeter {
    args: GreeterArgs,
}

impl Greeter {
    pub fn new(args: GreeterArgs) -> Self {
        Self { args }
    }
}

impl Program for Greeter {
    fn validate(&self) -> Result<()> {
        self.args.validate()
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(name) = self.args.names.first() else {
            return Err(CalcError::usage(GREETER_USAGE));
        };
        if self.args.names.len() > 1 {
            tracing::debug!("ignoring {} extra arguments", self.args.names.len() - 1);
        }

        writeln!(out, "{}", sum(FIRST_OPERAND, SECOND_OPERAND))?;
        // the name goes out byte for byte, UTF-8 or not
        out.write_all(b"Hello, ")?;
        out.write_all(name.as_encoded_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }
}
