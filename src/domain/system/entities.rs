use serde::{Deserialize, Serialize};

/// Device and filesystem figures reported by `/$sysinfo`. Never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysInfo {
    pub flash_size_bytes: u64,
    pub free_heap_bytes: u64,
    pub fs_total_bytes: u64,
    pub fs_used_bytes: u64,
}

/// 無線ネットワークの接続情報
///
/// An empty SSID means "reuse whatever the network stack has stored".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    pub passphrase: String,
}

impl WifiCredentials {
    pub fn new(ssid: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            passphrase: passphrase.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }
}

impl std::fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("passphrase", &format_args!("<{} bytes>", self.passphrase.len()))
            .finish()
    }
}
