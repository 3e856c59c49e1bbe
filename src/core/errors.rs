use thiserror::Error;

#[derive(Error, Debug)]
pub enum CihuiError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Vocabulary set '{0}' has no entries")]
    EmptyVocabulary(String),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("CihuiError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for CihuiError {
    fn from(error: std::io::Error) -> Self {
        CihuiError::Io(Box::new(error))
    }
}
