use crate::config::{AdderArgs, ADDER_USAGE};
use crate::core::arith::{parse_operand, sum};
use crate::core::{Program, Result};
use crate::utils::error::CalcError;
use crate::utils::validation::Validate;
use std::io::Write;

/// Adds the two operands given on the command line.
pub struct Adder {
    args: AdderArgs,
}

impl Adder {
    pub fn new(args: AdderArgs) -> Self {
        Self { args }
    }
}

impl Program for Adder {
    fn validate(&self) -> Result<()> {
        self.args.validate()
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let [x, y] = self.args.operands.as_slice() else {
            return Err(CalcError::usage(ADDER_USAGE));
        };

        let result = sum(parse_operand(x), parse_operand(y));
        tracing::debug!(?result, "computed sum");
        writeln!(out, "{}", result)?;
        Ok(())
    }
}
