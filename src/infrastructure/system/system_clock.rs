use crate::domain::system::{ClockSync, NetworkError};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

/// Enables NTP synchronization of the system clock through `timedatectl`.
///
/// The NTP server list itself belongs to the host's time daemon; the configured
/// server and timezone are only reported.
pub struct SystemClock;

impl Default for SystemClock {
    fn default() -> Self {
        Self
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClockSync for SystemClock {
    async fn synchronize(&self, timezone: &str, ntp_server: &str) -> Result<(), NetworkError> {
        info!("Setup ntp (server: {}, timezone: {})", ntp_server, timezone);

        let output = Command::new("timedatectl")
            .args(["set-ntp", "true"])
            .output()
            .await
            .map_err(|e| {
                NetworkError::SystemCommandFailed(format!("Failed to run timedatectl: {}", e))
            })?;

        if !output.status.success() {
            return Err(NetworkError::ClockSyncFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        info!("Current time: {}", chrono::Local::now().to_rfc3339());
        Ok(())
    }
}
