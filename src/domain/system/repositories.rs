use super::{NetworkError, PlatformError, WifiCredentials};
use async_trait::async_trait;

/// Hardware figures that only the platform knows.
pub trait Platform: Send + Sync {
    fn flash_size_bytes(&self) -> Result<u64, PlatformError>;
    fn free_heap_bytes(&self) -> Result<u64, PlatformError>;
}

/// Wireless association and hostname assignment.
#[async_trait]
pub trait NetworkLink: Send + Sync {
    /// Starts associating with the network. Completion is observed through [`NetworkLink::is_connected`].
    async fn connect(&self, credentials: &WifiCredentials) -> Result<(), NetworkError>;
    async fn is_connected(&self) -> Result<bool, NetworkError>;
    async fn set_hostname(&self, hostname: &str) -> Result<(), NetworkError>;
}

/// Time synchronization. Best-effort: callers never verify the result.
#[async_trait]
pub trait ClockSync: Send + Sync {
    async fn synchronize(&self, timezone: &str, ntp_server: &str) -> Result<(), NetworkError>;
}
