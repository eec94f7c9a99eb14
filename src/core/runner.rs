use crate::core::Program;
use crate::utils::error::CalcError;
use std::io::Write;

pub struct Runner<P: Program> {
    program: P,
}

impl<P: Program> Runner<P> {
    pub fn new(program: P) -> Self {
        Self { program }
    }

    /// Validate and execute, writing everything to `out`. Returns the exit status.
    pub fn run<W: Write>(&self, out: &mut W) -> u8 {
        let result = self
            .program
            .validate()
            .and_then(|_| self.program.execute(out))
            .and_then(|_| out.flush().map_err(CalcError::from));

        match result {
            Ok(()) => {
                tracing::debug!("program completed");
                0
            }
            Err(e) => report(&e, out),
        }
    }
}

/// Print what the user needs to see for `err` and return its exit status.
pub fn report<W: Write>(err: &CalcError, out: &mut W) -> u8 {
    match err {
        CalcError::Usage { usage } => {
            tracing::debug!("{} (category: {:?})", err, err.category());
            if let Err(e) = writeln!(out, "{}", usage).and_then(|_| out.flush()) {
                tracing::error!("failed to print usage: {}", e);
            }
        }
        CalcError::Output(_) => tracing::error!("{}", err),
    }
    err.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdderArgs, GreeterArgs, ADDER_USAGE, GREETER_USAGE};
    use crate::core::adder::Adder;
    use crate::core::greeter::Greeter;
    use std::io;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_adder_success() {
        let mut out = Vec::new();
        let code = Runner::new(Adder::new(AdderArgs::new(strings(&["3", "4"])))).run(&mut out);
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "The result of 3 + 4 = 7\n");
    }

    #[test]
    fn test_run_adder_wrong_count_prints_usage_only() {
        for operands in [vec![], strings(&["1"]), strings(&["1", "2", "3"])] {
            let mut out = Vec::new();
            let code = Runner::new(Adder::new(AdderArgs::new(operands))).run(&mut out);
            assert_eq!(code, 1);
            assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", ADDER_USAGE));
        }
    }

    #[test]
    fn test_run_greeter_without_name() {
        let mut out = Vec::new();
        let code = Runner::new(Greeter::new(GreeterArgs::default())).run(&mut out);
        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", GREETER_USAGE));
    }

    #[test]
    fn test_run_output_failure_exits_nonzero() {
        let code =
            Runner::new(Greeter::new(GreeterArgs::new(strings(&["Alice"])))).run(&mut ClosedPipe);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_report_usage_error() {
        let mut out = Vec::new();
        let code = report(&CalcError::usage(GREETER_USAGE), &mut out);
        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "USAGE: ./hello NAME\n");
    }
}
