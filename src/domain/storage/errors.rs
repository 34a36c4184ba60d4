use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilesystemError {
    #[error("Filesystem could not be mounted: {0}")]
    MountFailed(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("File system I/O error: {0}")]
    Io(#[from] std::io::Error),
}
