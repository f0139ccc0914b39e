use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use send2mail::cli::Cli;
use send2mail::config::Config;
use send2mail::error::MailError;
use send2mail::request::SendRequest;
use send2mail::{logging, message, transport, validate};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                return ExitCode::SUCCESS;
            }
            return ExitCode::from(MailError::Argument(err.to_string()).exit_code());
        }
    };

    match run(&cli) {
        Ok(()) => {
            info!("Finished successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // The logger is not wired up yet if config or log-file
            // handling was what failed
            if log::log_enabled!(log::Level::Error) {
                error!("{}", err);
            } else {
                eprintln!("{}", err);
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), MailError> {
    let config_path = shellexpand::tilde(&cli.config).into_owned();
    let config = Config::load(&config_path)?;

    // --log without a value falls back to the configured file name
    let log_file = cli.log.as_ref().map(|value| match value {
        Some(name) if !name.is_empty() => name.clone(),
        _ => config.default_logfile.clone(),
    });
    logging::init(log_file.as_deref().map(Path::new))?;

    info!("Starting send2mail");

    let request = SendRequest::resolve(cli, &config)?;
    let request = validate::validate(request)?;
    let message = message::build(&request)?;
    transport::send(
        &request,
        &message,
        Duration::from_secs(config.connect_timeout_secs),
    )?;

    Ok(())
}
