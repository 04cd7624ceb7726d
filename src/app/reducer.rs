//! Pure state transitions for the offer tool

use super::state::{AppState, EmailLogEntry, Notice};
use crate::offer::OfferField;
use chrono::{DateTime, Local};

/// Every state transition the tool can perform
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leave the welcome screen
    Start,
    /// Replace one raw form field
    SetField { field: OfferField, value: String },
    /// Flip between monthly and annual figures
    ToggleAnnual,
    /// Replace the recipient address
    SetRecipient(String),
    /// Begin a send; refused while one is in flight or without a recipient
    SendStarted,
    /// A send completed; logs the current recipient
    SendSucceeded { sent_at: DateTime<Local> },
    /// A send failed; raises one generic notice, nothing else changes
    SendFailed,
    /// Clear the pending notice
    DismissNotice,
    /// Remove one log entry by index; out of range is a no-op
    DeleteLogEntry(usize),
}

/// Apply one action to the state, returning the next state
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut next = state;

    match action {
        Action::Start => {
            next.started = true;
        }
        Action::SetField { field, value } => {
            next.form.set(field, value);
        }
        Action::ToggleAnnual => {
            next.show_annual = !next.show_annual;
        }
        Action::SetRecipient(recipient) => {
            next.recipient = recipient;
        }
        Action::SendStarted => {
            if next.send_in_flight {
                return next;
            }
            if next.recipient.trim().is_empty() {
                next.notice = Some(Notice::MissingRecipient);
                return next;
            }
            next.send_in_flight = true;
            next.notice = None;
        }
        Action::SendSucceeded { sent_at } => {
            next.log.push(EmailLogEntry {
                recipient: next.recipient.clone(),
                sent_at,
            });
            next.send_in_flight = false;
            next.notice = Some(Notice::Sent);
        }
        Action::SendFailed => {
            next.send_in_flight = false;
            next.notice = Some(Notice::SendFailed);
        }
        Action::DismissNotice => {
            next.notice = None;
        }
        Action::DeleteLogEntry(index) => {
            if index < next.log.len() {
                next.log.remove(index);
            }
        }
    }

    next
}
