use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid invocation: {usage}")]
    Usage { usage: &'static str },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Invocation,
    Output,
}

impl CalcError {
    pub fn usage(usage: &'static str) -> Self {
        CalcError::Usage { usage }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::Usage { .. } => ErrorCategory::Invocation,
            CalcError::Output(_) => ErrorCategory::Output,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Invocation | ErrorCategory::Output => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
