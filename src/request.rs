use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::MailError;

/// Where the body text comes from. The actual content is only read
/// when the message is built.
#[derive(Debug, Clone)]
pub enum BodySource {
    Literal(String),
    File(PathBuf),
    Generated,
}

/// Fully-resolved parameters for one send. Built once per invocation
/// and immutable afterwards.
#[derive(Debug, Clone)]
pub struct SendRequest {
    pub server: String,
    pub port: u16,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: BodySource,
    pub attachments: Vec<PathBuf>,
    pub credentials: Option<Credentials>,
    pub use_ssl: bool,
}

impl SendRequest {
    /// Reconciles command-line arguments and configured defaults into a
    /// request. Reads the small auxiliary files (attachment list, auth
    /// file) here; a missing one fails the run before validation.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, MailError> {
        let attachments = match (&cli.files, &cli.files_list) {
            (Some(inline), None) => parse_inline_list(inline),
            (None, Some(list_path)) => read_list_file(list_path)?,
            _ => {
                return Err(MailError::Argument(
                    "exactly one of --files and --files-list must be given".to_string(),
                ))
            }
        };

        let body = match (&cli.text, &cli.text_file) {
            (Some(text), None) => BodySource::Literal(text.clone()),
            (None, Some(path)) => {
                if !path.is_file() {
                    return Err(MailError::FileNotFound(path.clone()));
                }
                BodySource::File(path.clone())
            }
            (None, None) => BodySource::Generated,
            (Some(_), Some(_)) => {
                return Err(MailError::Argument(
                    "--text and --text-file are mutually exclusive".to_string(),
                ))
            }
        };

        let credentials = match (&cli.auth, &cli.auth_file) {
            (Some(raw), None) => Some(Credentials::parse(raw)?),
            (None, Some(path)) => Some(Credentials::from_file(path)?),
            (None, None) => None,
            (Some(_), Some(_)) => {
                return Err(MailError::Argument(
                    "--auth and --auth-file are mutually exclusive".to_string(),
                ))
            }
        };

        let request = Self {
            server: cli.server.clone(),
            port: cli.port,
            sender: cli.from.clone().unwrap_or_else(|| config.admin_mail.clone()),
            recipient: cli.to.clone(),
            subject: cli
                .subject
                .clone()
                .unwrap_or_else(|| config.default_subject.clone()),
            body,
            attachments,
            credentials,
            use_ssl: cli.ssl,
        };

        info!(
            "Prepared request for {} with {} attachment(s)",
            request.recipient,
            request.attachments.len()
        );
        Ok(request)
    }
}

fn parse_inline_list(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn read_list_file(path: &Path) -> Result<Vec<PathBuf>, MailError> {
    if !path.is_file() {
        return Err(MailError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| MailError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let paths: Vec<PathBuf> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect();

    info!("Read {} path(s) from {}", paths.len(), path.display());
    Ok(paths)
}
