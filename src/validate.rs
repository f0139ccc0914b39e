use std::fs::{self, File};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MailError;
use crate::request::SendRequest;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9].+$").expect("email pattern compiles")
});

/// Syntactic address check only; no DNS or deliverability lookup.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

/// Checks a resolved request and returns it unchanged. The check order
/// is fixed so the first violation reported is deterministic:
/// recipient, sender, list non-emptiness, then each attachment in list
/// order.
pub fn validate(request: SendRequest) -> Result<SendRequest, MailError> {
    if !is_valid_email(&request.recipient) {
        return Err(MailError::InvalidEmail(request.recipient));
    }

    if !is_valid_email(&request.sender) {
        return Err(MailError::InvalidEmail(request.sender));
    }

    if request.attachments.is_empty() {
        return Err(MailError::NoAttachments);
    }

    for path in &request.attachments {
        check_attachment(path)?;
    }

    Ok(request)
}

/// The path must exist, be a regular file and be openable for reading.
/// Readability is not re-checked later; a read failure during message
/// build surfaces as an attachment error instead.
fn check_attachment(path: &Path) -> Result<(), MailError> {
    let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file || File::open(path).is_err() {
        return Err(MailError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}
