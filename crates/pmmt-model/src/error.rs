use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown regional command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
