use std::{
    env,
    io::{self, Write},
    process::ExitCode,
};

use env_logger::Env;
use log::debug;
use multitap::cli::{self, CliError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match try_main() {
        Ok(code) => code,
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("Unexpected error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli::run(env::args_os(), &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(usage @ CliError::Usage { .. }) => {
            // Usage goes to stdout; a closed pipe here is not worth reporting
            let _ = writeln!(out, "{}", usage);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(anyhow::Error::new(err).context("failed to decode keypad input")),
    }
}
