use std::process::ExitCode;

use clap::Parser;

use utos_driver::{args::Cli, config::load_config, error::DriverError, LOG_ENV};
use common::{log_error, log_info, logging::init_logging};

fn main() -> ExitCode {
    init_logging(LOG_ENV);

    let cli = Cli::parse();
    log_info!("Starting utos");

    let result = load_config()
        .map_err(DriverError::from)
        .and_then(|config| utos_driver::run(cli, &config, std::io::stdout().lock()));

    match result {
        Ok(status) => ExitCode::from(u8::try_from(status).unwrap_or(1)),
        Err(err) => {
            log_error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
