use thiserror::Error;

/// Errors that can occur while parsing a resume from a URL
#[derive(Error, Debug)]
pub enum ParseError {
    /// The supplied URL is empty or does not use an http(s) scheme
    #[error("file_url must be an http(s) URL: {0:?}")]
    InvalidInput(String),

    /// The remote server answered with a client or server error status
    #[error("unable to download file: {0}")]
    DownloadStatus(u16),

    /// The download failed at the transport level (timeout, DNS, TLS, ...)
    #[error("unable to download file: {0}")]
    Download(#[from] reqwest::Error),

    /// The document exceeds the configured download cap
    #[error("document exceeds the maximum download size of {limit} bytes")]
    DownloadTooLarge { limit: usize },

    /// The document yielded no usable text
    #[error("unable to extract text from resume")]
    Extraction,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ParseError {
    /// Stable error code reported to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidInput(_) => "INVALID_INPUT",
            ParseError::DownloadStatus(_)
            | ParseError::Download(_)
            | ParseError::DownloadTooLarge { .. } => "DOWNLOAD_ERROR",
            ParseError::Extraction => "EXTRACTION_ERROR",
            ParseError::Config(_) => "CONFIG_ERROR",
        }
    }
}
