use std::time::Duration;

use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::transport::smtp::response::{Category, Code};
use lettre::{Message, SmtpTransport, Transport};
use log::info;

use crate::error::MailError;
use crate::request::SendRequest;

/// Opens the SMTP connection described by the request, authenticates
/// when credentials are present and performs the single send attempt.
/// The transport, and with it the connection, is dropped on every exit
/// path before this function returns.
pub fn send(request: &SendRequest, message: &Message, timeout: Duration) -> Result<(), MailError> {
    info!(
        "Connecting to SMTP server {}:{} (SSL: {})",
        request.server, request.port, request.use_ssl
    );

    // --ssl means implicit TLS from the first byte, not a STARTTLS
    // upgrade; without it the connection stays plain
    let mut builder = if request.use_ssl {
        let tls = TlsParameters::new(request.server.clone())
            .map_err(|e| MailError::Connection(e.to_string()))?;
        SmtpTransport::relay(&request.server)
            .map_err(|e| MailError::Connection(e.to_string()))?
            .tls(Tls::Wrapper(tls))
    } else {
        SmtpTransport::builder_dangerous(&request.server)
    };

    builder = builder.port(request.port).timeout(Some(timeout));

    if let Some(credentials) = &request.credentials {
        builder = builder.credentials(SmtpCredentials::new(
            credentials.username.clone(),
            credentials.password.clone(),
        ));
    }

    let mailer = builder.build();
    mailer.send(message).map_err(|e| classify(&e))?;

    info!(
        "Message sent from {} to {}",
        request.sender, request.recipient
    );
    Ok(())
}

/// Maps a lettre SMTP error onto the failure taxonomy. An error
/// without a server status never got a usable connection; x3z replies
/// cover the AUTH extension (RFC 4954); everything else the server
/// said no to is a send failure.
fn classify(err: &lettre::transport::smtp::Error) -> MailError {
    match err.status() {
        Some(ref code) if is_auth_code(code) => MailError::Authentication(err.to_string()),
        Some(_) => MailError::Send(err.to_string()),
        None => MailError::Connection(err.to_string()),
    }
}

fn is_auth_code(code: &Code) -> bool {
    matches!(code.category, Category::Unspecified3)
}
