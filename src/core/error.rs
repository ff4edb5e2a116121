use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum SaError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from an API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An error occurred while reading or writing a CSV table.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An error occurred while touching the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted timestamp string could not be parsed back into a point in time.
    #[error("Timestamp parse error: {0}")]
    Timestamp(String),

    /// An invalid date range was provided for a price request (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,

    /// A required input for a stage is absent (missing file or column).
    #[error("Missing required input: {0}")]
    MissingInput(String),

    /// A stage boundary produced zero rows where at least one is required.
    #[error("Empty result set: {0}")]
    EmptyData(String),
}
