use thiserror::Error;

/// An error that ends a run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum RandError {
    /// The program was not given exactly one argument.
    ///
    /// The message is the usage line shown to the user.
    #[error("Usage: {program} n")]
    InvalidArgumentCount { program: String },
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
