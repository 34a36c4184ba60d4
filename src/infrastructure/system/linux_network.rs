use crate::domain::system::{NetworkError, NetworkLink, WifiCredentials};
use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, info};

/// Wireless link managed through NetworkManager and the kernel's sysfs view.
pub struct LinuxNetworkLink {
    interface: String,
}

impl LinuxNetworkLink {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
        }
    }

    async fn run_nmcli(&self, args: &[&str]) -> Result<std::process::Output, NetworkError> {
        Command::new("nmcli")
            .args(args)
            .output()
            .await
            .map_err(|e| NetworkError::SystemCommandFailed(format!("Failed to run nmcli: {}", e)))
    }
}

#[async_trait]
impl NetworkLink for LinuxNetworkLink {
    async fn connect(&self, credentials: &WifiCredentials) -> Result<(), NetworkError> {
        info!(
            "Joining wireless network {:?} on {}",
            credentials.ssid, self.interface
        );

        let mut args = vec![
            "device",
            "wifi",
            "connect",
            credentials.ssid.as_str(),
            "ifname",
            self.interface.as_str(),
        ];
        if !credentials.passphrase.is_empty() {
            args.extend(["password", credentials.passphrase.as_str()]);
        }

        let output = self.run_nmcli(&args).await?;
        if !output.status.success() {
            return Err(NetworkError::ConnectFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(())
    }

    async fn is_connected(&self) -> Result<bool, NetworkError> {
        let operstate = format!("/sys/class/net/{}/operstate", self.interface);
        let state = fs::read_to_string(&operstate)
            .await
            .map_err(|_| NetworkError::InterfaceNotFound(self.interface.clone()))?;

        debug!("{} operstate: {}", self.interface, state.trim());
        Ok(state.trim() == "up")
    }

    async fn set_hostname(&self, hostname: &str) -> Result<(), NetworkError> {
        nix::unistd::sethostname(hostname)
            .map_err(|e| NetworkError::HostnameFailed(format!("{}: {}", hostname, e)))?;
        info!("Hostname set to {}", hostname);
        Ok(())
    }
}
