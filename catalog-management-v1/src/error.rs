use cloud_api_framework::reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] cloud_api_framework::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("no more results available")]
    NoMoreResults,
    #[error("invalid '{param}' cursor in next page link: {value}")]
    InvalidCursor { param: &'static str, value: String },
    #[error("cannot parse page link '{link}': {error}")]
    InvalidLink { link: String, error: url::ParseError },
}

impl Error {
    /// Returns the HTTP status of an error response returned by the service.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Error::Http(err) => err.status_code(),
            _ => None,
        }
    }

    /// The requested resource does not exist (anymore).
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }
}
