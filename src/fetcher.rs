use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use crate::error::ParseError;

/// Default cap on downloaded document size. Resumes are small; anything past
/// this is either not a resume or a resource-exhaustion attempt.
pub const DEFAULT_MAX_DOWNLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Raw download result: the document bytes plus the Content-Type header, if
/// the server sent one.
#[derive(Debug)]
pub struct FetchResult {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

pub struct DocumentFetcher {
    client: Client,
    max_bytes: usize,
}

impl DocumentFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; ResumeParserBot/1.0)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_bytes: DEFAULT_MAX_DOWNLOAD_BYTES,
        }
    }

    /// Override the download size cap.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Issue a single GET for the document. No retries: a transient failure
    /// surfaces to the caller immediately.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, ParseError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(ParseError::DownloadStatus(status.as_u16()));
        }

        if let Some(length) = response.content_length() {
            if length as usize > self.max_bytes {
                return Err(ParseError::DownloadTooLarge {
                    limit: self.max_bytes,
                });
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?;
        // Content-Length is advisory; check the actual body too.
        if bytes.len() > self.max_bytes {
            return Err(ParseError::DownloadTooLarge {
                limit: self.max_bytes,
            });
        }

        debug!(
            "Fetched {} bytes (content-type: {:?})",
            bytes.len(),
            content_type
        );

        Ok(FetchResult {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}
