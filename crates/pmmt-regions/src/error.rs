use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionsError {
    #[error("failed to parse member table at line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("unknown regional command at line {line}: {value}")]
    UnknownCommand { line: usize, value: String },

    #[error("member table is empty")]
    EmptyTable,
}

pub type Result<T> = std::result::Result<T, RegionsError>;
