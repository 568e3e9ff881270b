use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
