use crate::domain::storage::Filesystem;
use crate::domain::system::{ClockSync, NetworkLink, Platform};
use crate::interfaces::web::server::{ServerError, create_server};
use crate::interfaces::web::state::AppState;
use crate::{AppConfig, NetworkConfig};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum StartupError {
    /// The device cannot operate; the supervisor is expected to restart the service.
    #[error("Restart required: {0}")]
    RestartRequired(String),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// 起動シーケンスを実行し、Web サーバーを立ち上げるユースケース
pub struct RunApplicationUseCase {
    filesystem: Arc<dyn Filesystem>,
    platform: Arc<dyn Platform>,
    network: Arc<dyn NetworkLink>,
    clock: Arc<dyn ClockSync>,
}

impl RunApplicationUseCase {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        platform: Arc<dyn Platform>,
        network: Arc<dyn NetworkLink>,
        clock: Arc<dyn ClockSync>,
    ) -> Self {
        Self {
            filesystem,
            platform,
            network,
            clock,
        }
    }

    pub async fn execute(&self, config: &AppConfig) -> Result<(), StartupError> {
        self.bring_up(config).await?;

        let state = AppState::new(
            self.filesystem.clone(),
            self.platform.clone(),
            config.server.button_mode,
        );
        create_server(&config.server, state).await?;
        Ok(())
    }

    /// Everything that has to happen before the first request is accepted.
    pub async fn bring_up(&self, config: &AppConfig) -> Result<(), StartupError> {
        self.mount_filesystem(config.restart_delay).await?;

        if !config.network.enabled {
            info!("Network bring-up disabled, serving on the current network setup");
            return Ok(());
        }

        self.join_network(&config.network).await;

        if let Err(e) = self.network.set_hostname(&config.network.hostname).await {
            warn!("Could not set hostname: {}", e);
        }

        if let Err(e) = self
            .clock
            .synchronize(&config.network.timezone, &config.network.ntp_server)
            .await
        {
            warn!("Clock synchronization failed: {}", e);
        }

        Ok(())
    }

    async fn mount_filesystem(&self, restart_delay: Duration) -> Result<(), StartupError> {
        info!("Mounting the filesystem...");

        if let Err(e) = self.filesystem.mount() {
            error!("Could not mount the filesystem: {}", e);
            sleep(restart_delay).await;
            return Err(StartupError::RestartRequired(e.to_string()));
        }

        Ok(())
    }

    /// Blocks until the link is up. There is no timeout.
    async fn join_network(&self, config: &NetworkConfig) {
        if config.credentials.is_configured() {
            if let Err(e) = self.network.connect(&config.credentials).await {
                warn!("Association request failed: {}", e);
            }
        } else {
            info!("No SSID configured, using stored network credentials");
        }

        info!("Connect to WiFi on {}...", config.interface);
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.network.is_connected().await {
                Ok(true) => break,
                Ok(false) => debug!("Waiting for network (attempt {})", attempts),
                Err(e) => debug!("Network not ready (attempt {}): {}", attempts, e),
            }
            sleep(config.poll_interval).await;
        }

        info!("Connected after {} attempt(s)", attempts);
    }
}
