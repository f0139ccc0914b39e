use std::path::PathBuf;

use thiserror::Error;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ARGUMENT_ERROR: u8 = 1;
pub const EXIT_FILE_NOT_FOUND: u8 = 2;
pub const EXIT_FILE_READ_ERROR: u8 = 3;
pub const EXIT_ATTACHMENT_ERROR: u8 = 4;
pub const EXIT_SMTP_CONNECTION_ERROR: u8 = 5;
pub const EXIT_SMTP_AUTH_ERROR: u8 = 6;
pub const EXIT_SMTP_SEND_ERROR: u8 = 7;
pub const EXIT_INVALID_EMAIL: u8 = 8;
pub const EXIT_NO_FILES: u8 = 9;
pub const EXIT_UNKNOWN_ERROR: u8 = 99;

/// Failure taxonomy for a send run. Every invocation terminates with
/// exit 0 or with the code of exactly one of these variants.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("Argument error: {0}")]
    Argument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to attach {}: {}", .path.display(), .reason)]
    Attachment { path: PathBuf, reason: String },

    #[error("SMTP connection error: {0}")]
    Connection(String),

    #[error("SMTP authentication error: {0}")]
    Authentication(String),

    #[error("SMTP send error: {0}")]
    Send(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("No attachments specified")]
    NoAttachments,

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl MailError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            MailError::Argument(_) => EXIT_ARGUMENT_ERROR,
            MailError::FileNotFound(_) => EXIT_FILE_NOT_FOUND,
            MailError::FileRead { .. } => EXIT_FILE_READ_ERROR,
            MailError::Attachment { .. } => EXIT_ATTACHMENT_ERROR,
            MailError::Connection(_) => EXIT_SMTP_CONNECTION_ERROR,
            MailError::Authentication(_) => EXIT_SMTP_AUTH_ERROR,
            MailError::Send(_) => EXIT_SMTP_SEND_ERROR,
            MailError::InvalidEmail(_) => EXIT_INVALID_EMAIL,
            MailError::NoAttachments => EXIT_NO_FILES,
            MailError::Unknown(_) => EXIT_UNKNOWN_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_match_contract() {
        assert_eq!(MailError::Argument("x".into()).exit_code(), 1);
        assert_eq!(MailError::FileNotFound("x".into()).exit_code(), 2);
        assert_eq!(
            MailError::FileRead {
                path: "x".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
            }
            .exit_code(),
            3
        );
        assert_eq!(
            MailError::Attachment {
                path: "x".into(),
                reason: "boom".into(),
            }
            .exit_code(),
            4
        );
        assert_eq!(MailError::Connection("x".into()).exit_code(), 5);
        assert_eq!(MailError::Authentication("x".into()).exit_code(), 6);
        assert_eq!(MailError::Send("x".into()).exit_code(), 7);
        assert_eq!(MailError::InvalidEmail("x".into()).exit_code(), 8);
        assert_eq!(MailError::NoAttachments.exit_code(), 9);
        assert_eq!(MailError::Unknown("x".into()).exit_code(), 99);
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = MailError::FileNotFound(PathBuf::from("missing.pdf"));
        assert!(err.to_string().contains("missing.pdf"));

        let err = MailError::InvalidEmail("not-an-email".into());
        assert!(err.to_string().contains("not-an-email"));
    }
}
