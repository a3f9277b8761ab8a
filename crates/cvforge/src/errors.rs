use thiserror::Error;

/// Library-level error type.
///
/// Every failure in this crate is synchronous and propagated to the caller;
/// nothing is caught or retried internally. Decoding a malformed document
/// fails the whole operation rather than returning a partial resume.
#[derive(Debug, Error)]
pub enum Error {
    /// A value failed domain validation at construction time.
    #[error("{0}")]
    Validation(String),

    /// A wire document could not be decoded into the content model.
    #[error("decode error: {0}")]
    Decode(String),

    /// Propagated from the JSON layer (malformed text, missing fields).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated from the YAML layer.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
