use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("couldn't get {name} from environment")]
    MissingEnvVar { name: &'static str },

    #[error("invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("couldn't set up http session: {0}")]
    SessionSetup(#[source] reqwest::Error),

    #[error("couldn't build {method} request for {url}: {reason}")]
    RequestConstruction {
        method: String,
        url: String,
        reason: String,
    },

    #[error("http request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("status code mismatch: wanted {wanted} got {got} for {url}")]
    StatusMismatch {
        wanted: StatusCode,
        got: StatusCode,
        url: Url,
        /// Full response body, kept for diagnostics even though the status
        /// was wrong.
        body: Vec<u8>,
    },

    #[error("couldn't publish notification: {message}")]
    Publish { message: String },
}

pub type Result<T> = std::result::Result<T, WatchError>;
