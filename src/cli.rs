use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Sends an email with file attachments through an SMTP server.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
#[clap(group(ArgGroup::new("attachments").required(true).args(["files", "files_list"])))]
pub struct Cli {
    /// SMTP server host
    #[clap(short = 's', long)]
    pub server: String,

    /// SMTP server port
    #[clap(short = 'p', long)]
    pub port: u16,

    /// Recipient email address
    #[clap(short = 't', long)]
    pub to: String,

    /// Sender email address (default: the configured admin address)
    #[clap(short = 'f', long)]
    pub from: Option<String>,

    /// Mail subject (default: the configured subject)
    #[clap(short = 'j', long)]
    pub subject: Option<String>,

    /// Files to attach, comma-separated
    #[clap(short = 'a', long)]
    pub files: Option<String>,

    /// File with the list of attachments, one path per line
    #[clap(long, value_name = "FILE")]
    pub files_list: Option<PathBuf>,

    /// Mail body text
    #[clap(short = 'b', long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// File with the mail body text
    #[clap(long, value_name = "FILE")]
    pub text_file: Option<PathBuf>,

    /// Credentials as user:password
    #[clap(short = 'u', long, conflicts_with = "auth_file")]
    pub auth: Option<String>,

    /// File with credentials (user:password)
    #[clap(long, value_name = "FILE")]
    pub auth_file: Option<PathBuf>,

    /// Connect over implicit SSL/TLS
    #[clap(short = 'S', long)]
    pub ssl: bool,

    /// Also append logs to a file (default file if none is given)
    #[clap(short = 'l', long, value_name = "FILE")]
    pub log: Option<Option<String>>,

    /// Path to config file
    #[clap(long, default_value = "~/.config/send2mail/config.json")]
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "send2mail",
            "-s",
            "smtp.test",
            "-p",
            "587",
            "-t",
            "a@b.com",
        ]
    }

    #[test]
    fn test_minimal_invocation() {
        let mut args = base_args();
        args.extend(["-a", "x.pdf"]);

        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.server, "smtp.test");
        assert_eq!(cli.port, 587);
        assert_eq!(cli.to, "a@b.com");
        assert_eq!(cli.files.as_deref(), Some("x.pdf"));
        assert!(!cli.ssl);
        assert!(cli.log.is_none());
    }

    #[test]
    fn test_attachment_source_is_required() {
        assert!(Cli::try_parse_from(base_args()).is_err());
    }

    #[test]
    fn test_files_and_files_list_are_exclusive() {
        let mut args = base_args();
        args.extend(["-a", "x.pdf", "--files-list", "list.txt"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_text_and_text_file_are_exclusive() {
        let mut args = base_args();
        args.extend(["-a", "x.pdf", "-b", "hello", "--text-file", "body.txt"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_auth_and_auth_file_are_exclusive() {
        let mut args = base_args();
        args.extend(["-a", "x.pdf", "-u", "a:b", "--auth-file", "auth.txt"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_log_flag_without_value() {
        let mut args = base_args();
        args.extend(["-a", "x.pdf", "--log"]);

        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log, Some(None));
    }

    #[test]
    fn test_log_flag_with_value() {
        let mut args = base_args();
        args.extend(["-a", "x.pdf", "--log=run.log"]);

        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log, Some(Some("run.log".to_string())));
    }
}
