//! Wrap a rendered offer into an attachable document artifact

use thiserror::Error;

/// Errors raised while producing the document artifact
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not encode offer document: {0}")]
    Encode(String),
}

/// Binary document ready to attach to an email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Produces a document artifact from a rendered offer
pub trait DocumentExporter {
    fn export(&self, rendered: &str) -> Result<ReportArtifact, ExportError>;
}

/// Exports the rendered card verbatim as a plain-text attachment
#[derive(Debug, Clone, Default)]
pub struct PlainDocumentExporter {
    file_name: String,
}

impl PlainDocumentExporter {
    /// Attachment name used by the send pipeline
    pub const DEFAULT_FILE_NAME: &'static str = "sales-offer.txt";

    pub fn new() -> Self {
        Self {
            file_name: Self::DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl DocumentExporter for PlainDocumentExporter {
    fn export(&self, rendered: &str) -> Result<ReportArtifact, ExportError> {
        let file_name = if self.file_name.is_empty() {
            Self::DEFAULT_FILE_NAME.to_string()
        } else {
            self.file_name.clone()
        };

        Ok(ReportArtifact {
            file_name,
            mime_type: "text/plain".to_string(),
            bytes: rendered.as_bytes().to_vec(),
        })
    }
}
