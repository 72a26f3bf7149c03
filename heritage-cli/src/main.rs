//! Entry point for the `heritage` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use heritage_cli::CliError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match heritage_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("heritage: {err}");
            ExitCode::FAILURE
        }
    }
}
