use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MailError;

/// Defaults injected into argument resolution. Kept in a value rather
/// than process-wide constants so the pipeline can be driven with a
/// different configuration in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sender address used when none is given on the command line.
    pub admin_mail: String,
    /// Subject used when none is given on the command line.
    pub default_subject: String,
    /// Log file used when `--log` is given without a value.
    pub default_logfile: String,
    /// SMTP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_mail: "noreply@example.com".to_string(),
            default_subject: "Mail with attachments".to_string(),
            default_logfile: "send2mail.log".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Loads the config from a JSON file. A missing file is not an
    /// error; the built-in defaults apply.
    pub fn load(path: &str) -> Result<Self, MailError> {
        let path = Path::new(path);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| MailError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| {
            MailError::Argument(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.admin_mail, "noreply@example.com");
        assert_eq!(config.default_logfile, "send2mail.log");
        assert_eq!(config.connect_timeout_secs, 5);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = Config::load("/nonexistent/send2mail/config.json").unwrap();
        assert_eq!(config.admin_mail, Config::default().admin_mail);
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"admin_mail": "robot@corp.test"}}"#).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.admin_mail, "robot@corp.test");
        // Unset fields keep their defaults
        assert_eq!(config.default_subject, Config::default().default_subject);
    }

    #[test]
    fn test_load_garbage_is_an_argument_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_ARGUMENT_ERROR);
    }
}
