use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Failed to read {source_path}: {message}")]
    ReadFailed {
        source_path: String,
        message: String,
    },

    #[error("Unexpected content in {source_path}: {message}")]
    ParseFailed {
        source_path: String,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Network interface not found: {0}")]
    InterfaceNotFound(String),

    #[error("Failed to join wireless network: {0}")]
    ConnectFailed(String),

    #[error("Failed to set hostname: {0}")]
    HostnameFailed(String),

    #[error("Clock synchronization failed: {0}")]
    ClockSyncFailed(String),

    #[error("System command failed: {0}")]
    SystemCommandFailed(String),
}
