//! Love Lens relationship analysis exporter
//!
//! A library for turning a structured relationship-analysis record into a
//! Word document (`.docx`). Handles input validation, section assembly,
//! WordprocessingML serialization, and base64 boundary encoding.

pub mod document;
pub mod docx;
pub mod encoding;
pub mod models;

pub use document::{build_document, Block, Document};
pub use models::{AnalysisRecord, ExportError, ShapeError};

/// Main entry point: JSON payload in, base64-encoded `.docx` line out.
pub fn export_analysis(input: &str) -> Result<String, ExportError> {
    let bytes = export_analysis_bytes(input)?;
    Ok(encoding::encode(&bytes))
}

/// Same pipeline, stopping at the raw document bytes.
pub fn export_analysis_bytes(input: &str) -> Result<Vec<u8>, ExportError> {
    // 1. Parse and validate the record before any document work starts
    let record = models::parse_record(input)?;

    // 2. Assemble the fixed section sequence
    let document = build_document(&record);

    // 3. Serialize to an in-memory .docx package
    docx::render(&document)
}
