use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A format selector that no target answers to.
    #[error("Unknown format: {name}\nAvailable formats: {available}")]
    UnknownFormat {
        name: String,
        available: &'static str,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    pub(crate) fn unknown_format(name: &str, available: &'static str) -> Self {
        Error::UnknownFormat {
            name: name.to_string(),
            available,
        }
    }
}
