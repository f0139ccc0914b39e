use std::fs;
use std::path::Path;

use log::info;

use crate::error::MailError;

/// SMTP credential pair. Exists in memory only for the duration of a
/// run; never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Parses an inline `user:password` argument.
    pub fn parse(raw: &str) -> Result<Self, MailError> {
        let (username, password) = raw.split_once(':').ok_or_else(|| {
            MailError::Authentication("credentials must be given as user:password".to_string())
        })?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Reads credentials from a file: `user:password` on the first
    /// non-empty line, or the username on the first line and the
    /// password on the second.
    pub fn from_file(path: &Path) -> Result<Self, MailError> {
        if !path.is_file() {
            return Err(MailError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| MailError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
        let first = lines.next().ok_or_else(|| {
            MailError::Authentication(format!("auth file {} is empty", path.display()))
        })?;

        let credentials = match first.split_once(':') {
            Some((username, password)) => Self {
                username: username.to_string(),
                password: password.to_string(),
            },
            None => {
                let password = lines.next().ok_or_else(|| {
                    MailError::Authentication(format!(
                        "auth file {} must contain user:password or a user line and a password line",
                        path.display()
                    ))
                })?;
                Self {
                    username: first.to_string(),
                    password: password.to_string(),
                }
            }
        };

        info!("Read credentials from {}", path.display());
        Ok(credentials)
    }
}
