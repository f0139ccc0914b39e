use std::fs;
use std::path::{Path, PathBuf};

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::Message;
use log::info;

use crate::error::MailError;
use crate::request::{BodySource, SendRequest};

const GENERATED_INTRO: &str = "You have been sent the following files:";

/// Builds the complete MIME message: From/To/Subject headers and a
/// mixed multipart body whose first part is the text, followed by one
/// part per attachment in request order.
pub fn build(request: &SendRequest) -> Result<Message, MailError> {
    let from: Mailbox = request
        .sender
        .parse()
        .map_err(|_| MailError::InvalidEmail(request.sender.clone()))?;
    let to: Mailbox = request
        .recipient
        .parse()
        .map_err(|_| MailError::InvalidEmail(request.recipient.clone()))?;

    let body = resolve_body(request)?;
    let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(body));

    let octet_stream = ContentType::parse("application/octet-stream")
        .map_err(|e| MailError::Unknown(e.to_string()))?;

    for path in &request.attachments {
        // Existence was checked at validation time, but the file can
        // have vanished or lost read permission since
        let data = fs::read(path).map_err(|e| MailError::Attachment {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let name = basename(path);
        multipart = multipart.singlepart(Attachment::new(name.clone()).body(data, octet_stream.clone()));
        info!("Attached {}", name);
    }

    Message::builder()
        .from(from)
        .to(to)
        .subject(request.subject.clone())
        .multipart(multipart)
        .map_err(|e| MailError::Unknown(format!("failed to assemble message: {}", e)))
}

/// Picks the body text. Priority: literal `--text`, then `--text-file`
/// contents, then an auto-generated listing of the attachments. The
/// automatic signature is appended in every case.
pub fn resolve_body(request: &SendRequest) -> Result<String, MailError> {
    let body = match &request.body {
        BodySource::Literal(text) => {
            info!("Using body text from the command line");
            text.clone()
        }
        BodySource::File(path) => {
            let text = fs::read_to_string(path).map_err(|e| MailError::FileRead {
                path: path.clone(),
                source: e,
            })?;
            info!("Read body text from {}", path.display());
            text
        }
        BodySource::Generated => {
            info!("Using auto-generated body text");
            generate_body(&request.attachments)
        }
    };

    Ok(body + &signature(&request.sender))
}

fn generate_body(attachments: &[PathBuf]) -> String {
    let mut body = String::from(GENERATED_INTRO);
    for (i, path) in attachments.iter().enumerate() {
        body.push_str(&format!("\n{}. {}", i + 1, basename(path)));
    }
    body
}

fn signature(sender: &str) -> String {
    format!(
        "\n\nThis message was sent automatically, there is no need to reply.\nContact address: {}",
        sender
    )
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
