use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanguageError {
    /// The dataset could not be read or parsed.
    #[error("language dataset unavailable at {location}: {reason}")]
    DatasetUnavailable { location: String, reason: String },

    #[error("unknown language code '{0}'")]
    UnknownLanguageCode(String),

    /// A record is missing `name`, `native` or `iso_639_1`.
    #[error("invalid language record: missing mandatory attribute '{0}'")]
    InvalidLanguageRecord(String),
}

pub type Result<T> = std::result::Result<T, LanguageError>;
