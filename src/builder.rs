use std::time::Duration;

use crate::error::ParseError;
use crate::model::ParsedResume;
use crate::parse_resume_with_options;

/// Builder for configuring and executing a resume parse
#[derive(Debug, Default)]
pub struct ResumeParserBuilder {
    url: Option<String>,
    timeout: Option<Duration>,
    max_download_bytes: Option<usize>,
}

impl ResumeParserBuilder {
    /// Set the URL of the resume document
    ///
    /// # Example
    /// ```
    /// use resume_parser::ResumeParser;
    ///
    /// let builder = ResumeParser::builder()
    ///     .url("https://example.com/resume.pdf");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set a timeout for the download
    ///
    /// # Example
    /// ```
    /// use resume_parser::ResumeParser;
    /// use std::time::Duration;
    ///
    /// let builder = ResumeParser::builder()
    ///     .url("https://example.com/resume.pdf")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the cap on downloaded document size
    pub fn max_download_bytes(mut self, max_bytes: usize) -> Self {
        self.max_download_bytes = Some(max_bytes);
        self
    }

    /// Execute the parse
    ///
    /// # Errors
    /// Returns `ParseError` if:
    /// - No URL was specified, or it is not an http(s) URL
    /// - The download fails
    /// - No usable text can be extracted
    ///
    /// # Example
    /// ```no_run
    /// # use resume_parser::ResumeParser;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let parsed = ResumeParser::builder()
    ///     .url("https://example.com/resume.pdf")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ParsedResume, ParseError> {
        let url = self.url.ok_or_else(|| {
            ParseError::InvalidInput("No URL specified. Use .url()".to_string())
        })?;

        parse_resume_with_options(&url, self.timeout, self.max_download_bytes).await
    }
}

/// Main entry point for the builder API
pub struct ResumeParser;

impl ResumeParser {
    /// Creates a new builder for parsing a resume
    ///
    /// # Example
    /// ```
    /// use resume_parser::ResumeParser;
    ///
    /// let builder = ResumeParser::builder();
    /// ```
    pub fn builder() -> ResumeParserBuilder {
        ResumeParserBuilder::default()
    }
}
