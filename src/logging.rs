use std::path::Path;

use crate::error::MailError;

/// Wires the log facade to stdout, and additionally to an append-mode
/// log file when one was requested. Must be called once, before the
/// pipeline starts.
pub fn init(log_file: Option<&Path>) -> Result<(), MailError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} - {} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.target(),
                record.level(),
                message
            ));
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path).map_err(|e| MailError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?);
    }

    dispatch
        .apply()
        .map_err(|e| MailError::Unknown(e.to_string()))
}
