//! Email delivery: provider config, transport, and the send pipeline

mod config;
mod pipeline;
mod transport;

pub use config::MailConfig;
pub use pipeline::{send_offer, SendError};
pub use transport::{EmailJsTransport, MailTransport};

use thiserror::Error;

/// Errors raised by mail configuration and delivery
#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail provider rejected the request: status {0}")]
    Rejected(reqwest::StatusCode),

    #[error("could not read mail config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid mail config: {0}")]
    Config(#[from] toml::de::Error),
}
