use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulegenError {
    #[error("file is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),
    #[error("no data rows found in CSV file")]
    EmptyInput,
    #[error(
        "no valid rows found in CSV file; check that pattern_name and pattern columns exist and are not empty"
    )]
    NoValidRows,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, RulegenError>;
