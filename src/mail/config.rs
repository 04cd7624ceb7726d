//! Mail provider configuration

use super::MailError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// EmailJS endpoint and credentials
///
/// Defaults match the production sending identity; any field can be
/// overridden from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Send-form endpoint URL
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    /// Message body accompanying the attachment
    pub message: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send-form".to_string(),
            service_id: "service_vxrjzsh".to_string(),
            template_id: "template_m26wjnr".to_string(),
            user_id: "I3jJW4Um7f9kANtpX".to_string(),
            message: "Sales offer attached".to_string(),
        }
    }
}

impl MailConfig {
    /// Load config from a TOML file, falling back to defaults per field
    pub fn from_toml_path(path: &Path) -> Result<Self, MailError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
