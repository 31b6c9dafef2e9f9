use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoRoutesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number '{token}': expected {expected}")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },

    #[error("Input ended while waiting for {0}")]
    UnexpectedEof(&'static str),

    #[error("Interactive setup error: {0}")]
    Setup(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, EcoRoutesError>;
