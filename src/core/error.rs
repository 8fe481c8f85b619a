use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TtError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured header value is not valid for HTTP.
    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The profile page did not contain the rehydration data marker.
    #[error("rehydration data marker not found in page")]
    MarkerNotFound,

    /// The rehydration data marker was found but no closing tag follows it.
    #[error("rehydration data block is not terminated")]
    Unterminated,

    /// The extracted data block is not valid JSON.
    #[error("rehydration data parse: {0}")]
    Parse(#[from] serde_json::Error),

    /// The rehydration block parsed to an empty value (`{}`, `[]`, `null`, ...).
    #[error("rehydration data is empty")]
    EmptyData,

    /// A required profile field was absent or had the wrong shape.
    #[error("missing or malformed field: {0}")]
    MissingField(String),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A lookup was submitted outside a tokio runtime.
    #[error("no tokio runtime available to run the lookup")]
    NoRuntime,

    /// A lookup is already in flight on this session.
    #[error("a lookup is already in progress")]
    Busy,
}

impl TtError {
    /// Whether this error came from retrieving the page rather than from reading its fields.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            TtError::Http(_)
                | TtError::Url(_)
                | TtError::Header(_)
                | TtError::Status { .. }
                | TtError::MarkerNotFound
                | TtError::Unterminated
                | TtError::Parse(_)
                | TtError::EmptyData
        )
    }
}
