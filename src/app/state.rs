//! Application state for one offer-building session

use crate::offer::OfferForm;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One successful send, kept in the session log
///
/// Held in memory only; the log does not survive a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailLogEntry {
    pub recipient: String,
    pub sent_at: DateTime<Local>,
}

/// User-visible notice raised by the send path
///
/// Send failures surface as one generic notice regardless of which stage
/// failed; the specific cause only goes to the debug log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Sent,
    SendFailed,
    MissingRecipient,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Sent => "Email sent!",
            Notice::SendFailed => "Failed to send email.",
            Notice::MissingRecipient => "Please enter an email address.",
        }
    }
}

/// Complete state of the offer tool
///
/// All transitions go through [`crate::app::reduce`]; nothing mutates this
/// ambiently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Whether the user has moved past the welcome screen
    pub started: bool,

    /// Raw form fields as entered
    pub form: OfferForm,

    /// Show annual instead of monthly profit and revenue
    pub show_annual: bool,

    /// Recipient address for the send action
    pub recipient: String,

    /// True while a send is in flight; blocks further sends
    pub send_in_flight: bool,

    /// Log of successful sends this session
    pub log: Vec<EmailLogEntry>,

    /// Pending notice for the user, if any
    pub notice: Option<Notice>,
}
