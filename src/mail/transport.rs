//! Mail delivery over the EmailJS HTTP API

use super::config::MailConfig;
use super::MailError;
use crate::report::ReportArtifact;
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};

/// Delivers an offer document to a recipient
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, recipient: &str, artifact: &ReportArtifact) -> Result<(), MailError>;
}

/// EmailJS send-form transport
///
/// POSTs one multipart form per send: credentials, recipient, message, and
/// the offer document as an attachment. Any non-success status is a failure.
#[derive(Debug, Clone)]
pub struct EmailJsTransport {
    client: reqwest::Client,
    config: MailConfig,
}

impl EmailJsTransport {
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl MailTransport for EmailJsTransport {
    async fn send(&self, recipient: &str, artifact: &ReportArtifact) -> Result<(), MailError> {
        let attachment = Part::bytes(artifact.bytes.clone())
            .file_name(artifact.file_name.clone())
            .mime_str(&artifact.mime_type)?;

        let form = Form::new()
            .text("service_id", self.config.service_id.clone())
            .text("template_id", self.config.template_id.clone())
            .text("user_id", self.config.user_id.clone())
            .text("to_email", recipient.to_string())
            .text("message", self.config.message.clone())
            .part("attachment", attachment);

        debug!(
            "posting offer document ({} bytes) to {}",
            artifact.bytes.len(),
            self.config.endpoint
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailError::Rejected(status));
        }

        Ok(())
    }
}
