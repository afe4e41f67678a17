use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type NotifierResult<T> = Result<T, NotifierError>;
