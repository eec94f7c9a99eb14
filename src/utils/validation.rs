use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_exact_count<T>(usage: &'static str, args: &[T], expected: usize) -> Result<()> {
    if args.len() != expected {
        tracing::debug!("expected {} arguments, got {}", expected, args.len());
        return Err(CalcError::usage(usage));
    }
    Ok(())
}

pub fn validate_min_count<T>(usage: &'static str, args: &[T], min: usize) -> Result<()> {
    if args.len() < min {
        tracing::debug!("expected at least {} arguments, got {}", min, args.len());
        return Err(CalcError::usage(usage));
    }
    Ok(())
}
