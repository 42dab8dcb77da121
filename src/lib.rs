//! Fetch a resume from a URL, extract its text, and recognize a handful of
//! fields with lightweight heuristics.
//!
//! The pipeline is a single forward path: [`fetcher::DocumentFetcher`]
//! downloads the document, [`extractor::extract`] turns the bytes into text
//! (dispatching PDFs to the optional decoder), and [`recognizer::recognize`]
//! fills in the [`ParsedResume`] fields. Each stage is independent and
//! stateless, so the recognizer and extractor are testable with literal
//! strings.

pub mod builder;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod model;
pub mod pdf;
pub mod recognizer;
pub mod server;

use std::time::Duration;

use log::debug;

pub use builder::{ResumeParser, ResumeParserBuilder};
pub use config::Settings;
pub use error::ParseError;
pub use fetcher::{DocumentFetcher, FetchResult};
pub use model::ParsedResume;

/// Parse the resume at `url` with the default 30-second timeout.
pub async fn parse_resume(url: &str) -> Result<ParsedResume, ParseError> {
    parse_resume_with_options(url, None, None).await
}

/// Parse the resume at `url` with an explicit download timeout.
pub async fn parse_resume_with_timeout(
    url: &str,
    timeout: Option<Duration>,
) -> Result<ParsedResume, ParseError> {
    parse_resume_with_options(url, timeout, None).await
}

pub(crate) async fn parse_resume_with_options(
    url: &str,
    timeout: Option<Duration>,
    max_download_bytes: Option<usize>,
) -> Result<ParsedResume, ParseError> {
    validate_url(url)?;

    let mut fetcher = DocumentFetcher::new(timeout);
    if let Some(max_bytes) = max_download_bytes {
        fetcher = fetcher.with_max_bytes(max_bytes);
    }

    let fetched = fetcher.fetch(url).await?;
    let text = extractor::extract(&fetched.bytes, fetched.content_type.as_deref());
    if text.trim().is_empty() {
        return Err(ParseError::Extraction);
    }

    debug!("Extracted {} characters of text", text.len());
    Ok(recognizer::recognize(&text))
}

/// The URL must use an http(s) scheme; checked before any network activity.
pub(crate) fn validate_url(url: &str) -> Result<(), ParseError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ParseError::InvalidInput(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            validate_url("ftp://example.com/resume.pdf"),
            Err(ParseError::InvalidInput(_))
        ));
        assert!(matches!(validate_url(""), Err(ParseError::InvalidInput(_))));
        assert!(matches!(
            validate_url("example.com/resume.pdf"),
            Err(ParseError::InvalidInput(_))
        ));
    }

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("http://example.com/resume.txt").is_ok());
        assert!(validate_url("https://example.com/resume.pdf").is_ok());
    }
}
