//! Session state and its pure reducer

mod reducer;
mod state;

pub use reducer::{reduce, Action};
pub use state::{AppState, EmailLogEntry, Notice};
