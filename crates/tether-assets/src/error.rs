use std::path::PathBuf;

/// Errors that can occur while loading camera settings.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to parse camera settings '{0}': {1}")]
    ParseFailed(PathBuf, String),

    #[error("I/O error loading '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("unsupported settings format in '{0}'")]
    UnsupportedFormat(PathBuf),

    #[error("camera settings '{0}' has no name")]
    MissingName(PathBuf),
}
