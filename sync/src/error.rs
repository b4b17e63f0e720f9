use thiserror::Error;

/// Errors from the fallible surface of the sync crate.
///
/// The processor core itself has no fallible operations: invalid
/// construction parameters are clamped and unusable submissions are
/// silently discarded. Only configuration loading can fail.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
