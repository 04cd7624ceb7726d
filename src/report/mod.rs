//! Offer rendering and document export

mod exporter;
mod renderer;

pub use exporter::{DocumentExporter, ExportError, PlainDocumentExporter, ReportArtifact};
pub use renderer::{OfferRenderer, TextRenderer};
