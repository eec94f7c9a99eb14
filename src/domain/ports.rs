use crate::utils::error::Result;
use std::io::Write;

/// A single-shot console program: check the invocation, then write the result.
pub trait Program {
    fn validate(&self) -> Result<()>;
    fn execute<W: Write>(&self, out: &mut W) -> Result<()>;
}
