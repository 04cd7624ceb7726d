//! Render, export, and send one offer

use super::transport::MailTransport;
use crate::offer::OfferInputs;
use crate::projection::OfferProjection;
use crate::report::{DocumentExporter, ExportError, OfferRenderer};
use log::{debug, info};
use thiserror::Error;

/// Failure of the send pipeline
///
/// The user sees one generic failure notice either way; these variants
/// exist for the debug log only.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("could not produce the offer document")]
    Export(#[source] ExportError),

    #[error("could not deliver the offer email")]
    Transport(#[source] super::MailError),
}

/// Run the full send pipeline for one offer
///
/// Renders the card, wraps it as a document, and hands it to the transport.
/// There is no retry and no partial effect: a failure at any stage leaves
/// nothing behind. Callers gate concurrency through the reducer's
/// in-flight flag, so at most one pipeline runs at a time.
pub async fn send_offer(
    renderer: &dyn OfferRenderer,
    exporter: &dyn DocumentExporter,
    transport: &dyn MailTransport,
    inputs: &OfferInputs,
    projection: &OfferProjection,
    show_annual: bool,
    recipient: &str,
) -> Result<(), SendError> {
    let rendered = renderer.render(inputs, projection, show_annual);
    let artifact = exporter.export(&rendered).map_err(SendError::Export)?;
    debug!(
        "offer document ready: {} ({} bytes)",
        artifact.file_name,
        artifact.bytes.len()
    );

    transport
        .send(recipient, &artifact)
        .await
        .map_err(SendError::Transport)?;

    info!("offer emailed to {}", recipient);
    Ok(())
}
