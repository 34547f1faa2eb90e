/// Errors that can occur while building a photo preview.
#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    /// The photo file could not be read.
    #[error("could not read photo: {0}")]
    Io(#[from] std::io::Error),

    /// The background decode task panicked or was cancelled.
    #[error("preview task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
