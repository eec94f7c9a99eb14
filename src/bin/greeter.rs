use argcalc::core::runner::report;
use argcalc::utils::logger;
use argcalc::{Greeter, GreeterArgs, Runner};
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_cli_logger();

    let mut stdout = std::io::stdout().lock();
    let code = match GreeterArgs::try_from_argv(std::env::args_os()) {
        Ok(args) => {
            tracing::debug!("greeter invoked with {:?}", args.names);
            Runner::new(Greeter::new(args)).run(&mut stdout)
        }
        Err(e) => report(&e, &mut stdout),
    };

    ExitCode::from(code)
}
