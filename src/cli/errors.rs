use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pad(#[from] padsplits::Error),

    #[error("could not encode report: {0}")]
    Report(#[from] serde_json::Error),
}
