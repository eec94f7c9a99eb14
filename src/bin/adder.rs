use argcalc::core::runner::report;
use argcalc::utils::logger;
use argcalc::{Adder, AdderArgs, Runner};
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_cli_logger();

    let mut stdout = std::io::stdout().lock();
    let code = match AdderArgs::try_from_argv(std::env::args_os()) {
        Ok(args) => {
            tracing::debug!("adder invoked with {:?}", args.operands);
            Runner::new(Adder::new(args)).run(&mut stdout)
        }
        Err(e) => report(&e, &mut stdout),
    };

    ExitCode::from(code)
}
