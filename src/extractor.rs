use log::debug;

use crate::pdf;

/// Extract normalized text from a downloaded document.
///
/// Dispatch is content-type-first, magic-bytes-second:
/// 1. a Content-Type hint containing "pdf" (case-insensitive) routes to the
///    PDF decoder;
/// 2. otherwise a leading `%PDF` signature routes to the PDF decoder;
/// 3. everything else is decoded as plain UTF-8 text.
///
/// The PDF path degrades to the plain-text path when no decoder is compiled
/// in or the decode fails. Extraction itself never fails; the pipeline treats
/// blank output as the failure signal.
pub fn extract(bytes: &[u8], content_type: Option<&str>) -> String {
    if is_pdf(bytes, content_type) {
        if let Some(text) = pdf::decode(bytes) {
            return text;
        }
        debug!("PDF payload without usable decoder output, decoding as plain text");
    }
    decode_utf8_dropping_invalid(bytes)
}

fn is_pdf(bytes: &[u8], content_type: Option<&str>) -> bool {
    if let Some(hint) = content_type {
        if hint.to_ascii_lowercase().contains("pdf") {
            return true;
        }
    }
    bytes.starts_with(b"%PDF")
}

/// Decode bytes as UTF-8, silently dropping invalid sequences. Unlike
/// `String::from_utf8_lossy` this inserts no replacement characters, matching
/// a "decode what you can, skip the rest" policy.
fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // `valid` is guaranteed well-formed, so the Cow never allocates
                // a replacement.
                out.push_str(&String::from_utf8_lossy(valid));
                let skip = e.error_len().unwrap_or(after.len());
                if skip >= after.len() {
                    break;
                }
                rest = &after[skip..];
            }
        }
    }
    out
}
