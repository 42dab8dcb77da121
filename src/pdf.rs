//! Thin wrapper around the optional PDF-decoding collaborator.
//!
//! The `pdf` cargo feature controls whether the `pdf-extract` crate is linked
//! in. When the feature is off, or the decoder cannot make sense of the
//! document, callers fall back to plain-text decoding.

#[cfg(feature = "pdf")]
use log::warn;

/// Whether a PDF decoder is compiled in.
pub fn is_available() -> bool {
    cfg!(feature = "pdf")
}

/// Decode a PDF into per-page text joined with newlines, preserving page
/// order. Returns `None` when no decoder is available or the document-level
/// decode fails; never errors.
#[cfg(feature = "pdf")]
pub fn decode(bytes: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem_by_pages(bytes) {
        Ok(pages) => Some(pages.join("\n")),
        Err(e) => {
            warn!("PDF decode failed, falling back to plain text: {e}");
            None
        }
    }
}

#[cfg(not(feature = "pdf"))]
pub fn decode(_bytes: &[u8]) -> Option<String> {
    None
}
