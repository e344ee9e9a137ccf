//! Text extraction from uploaded documents (PDF, DOCX, plain text).

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use dotext::MsDoc;
use tracing::debug;

use crate::errors::AppError;

/// Extracts plain text from uploaded file bytes, dispatching on the declared
/// filename's extension (case-insensitive).
///
/// Unsupported extensions yield `Ok("")`; the handler surfaces that as an
/// empty-content error rather than a distinct unsupported-format one.
/// Malformed PDF/DOCX input comes back as a 400-class extraction error.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, AppError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf(bytes),
        "docx" => extract_docx(bytes),
        "txt" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        other => {
            debug!("unsupported extension {other:?}, treating as no content");
            Ok(String::new())
        }
    }
}

/// PDF extraction runs in-memory; pages with no extractable text contribute
/// nothing. pdf-extract can panic on some malformed documents, so the call is
/// contained with `catch_unwind`.
fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    let owned = bytes.to_vec();
    match std::panic::catch_unwind(move || pdf_extract::extract_text_from_mem(&owned)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Extraction("PDF", e.to_string())),
        Err(_) => Err(AppError::Extraction(
            "PDF",
            "parser panicked on malformed input".to_string(),
        )),
    }
}

/// `dotext` only opens documents by path, so the upload is staged to a scoped
/// temp file first. The `NamedTempFile` guard removes it on every exit path,
/// parse failure included; removal errors are swallowed by the guard.
fn extract_docx(bytes: &[u8]) -> Result<String, AppError> {
    let mut staged = tempfile::Builder::new()
        .suffix(".docx")
        .tempfile()
        .context("failed to create staging file for upload")?;
    staged
        .write_all(bytes)
        .context("failed to write upload to staging file")?;

    let mut docx = dotext::Docx::open(staged.path())
        .map_err(|e| AppError::Extraction("DOCX", e.to_string()))?;
    let mut text = String::new();
    docx.read_to_string(&mut text)
        .map_err(|e| AppError::Extraction("DOCX", e.to_string()))?;
    Ok(text)
}
