use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("keyword {0} is its own ancestor")]
    KeywordCycle(String),
    #[error("duplicate keyword: {0}")]
    DuplicateKeyword(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
