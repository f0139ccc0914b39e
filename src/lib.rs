pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod message;
pub mod request;
pub mod transport;
pub mod validate;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use credentials::Credentials;
pub use error::MailError;
pub use request::{BodySource, SendRequest};
