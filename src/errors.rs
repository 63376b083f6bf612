use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Argument error: {0}")]
    Arguments(#[from] clap::Error),

    #[error("Input closed before all parameters were read")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
