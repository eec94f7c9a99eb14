use crate::utils::error::Result;
use crate::utils::validation::{validate_exact_count, validate_min_count, Validate};
use std::ffi::OsString;

pub const ADDER_USAGE: &str = "USAGE: ./hello NUMBER NUMBER";
pub const GREETER_USAGE: &str = "USAGE: ./hello NAME";

/// Raw invocation of the adder. Every token is positional, so `-3` is an operand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "adder", disable_help_flag = true, disable_version_flag = true)
)]
pub struct AdderArgs {
    #[cfg_attr(feature = "cli", arg(num_args = 0.., allow_hyphen_values = true))]
    pub operands: Vec<OsString>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "greeter", disable_help_flag = true, disable_version_flag = true)
)]
pub struct GreeterArgs {
    #[cfg_attr(feature = "cli", arg(num_args = 0.., allow_hyphen_values = true))]
    pub names: Vec<OsString>,
}

impl AdderArgs {
    pub fn new<I, T>(operands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }
}

impl GreeterArgs {
    pub fn new<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for AdderArgs {
    fn validate(&self) -> Result<()> {
        validate_exact_count(ADDER_USAGE, &self.operands, 2)
    }
}

impl Validate for GreeterArgs {
    fn validate(&self) -> Result<()> {
        validate_min_count(GREETER_USAGE, &self.names, 1)
    }
}

#[cfg(feature = "cli")]
mod cli {
    use super::{AdderArgs, GreeterArgs, ADDER_USAGE, GREETER_USAGE};
    use crate::utils::error::{CalcError, Result};
    use clap::Parser;
    use std::ffi::OsString;
    use std::iter;

    fn parse<P, I, T>(name: &str, usage: &'static str, argv: I) -> Result<P>
    where
        P: Parser,
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from(name));

        // Our own `--` ends option parsing, so the user's tokens (a `--` included) stay values.
        let argv = iter::once(program)
            .chain(iter::once(OsString::from("--")))
            .chain(argv);

        P::try_parse_from(argv).map_err(|e| {
            tracing::debug!("argument capture failed: {:?}", e.kind());
            CalcError::usage(usage)
        })
    }

    impl AdderArgs {
        /// Capture `argv` (program name first). The operands are exactly `argv[1..]`.
        pub fn try_from_argv<I, T>(argv: I) -> Result<Self>
        where
            I: IntoIterator<Item = T>,
            T: Into<OsString>,
        {
            parse("adder", ADDER_USAGE, argv)
        }
    }

    impl GreeterArgs {
        pub fn try_from_argv<I, T>(argv: I) -> Result<Self>
        where
            I: IntoIterator<Item = T>,
            T: Into<OsString>,
        {
            parse("greeter", GREETER_USAGE, argv)
        }
    }
}
