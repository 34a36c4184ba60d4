//! # Button Webserver
//!
//! 小型デバイス上で動作する HTTP コントロールエンドポイント。
//! デバイス上のファイルシステムからファイルを配信し、デバイス／ファイルシステムの
//! 状態を JSON で返し、2 つのボタン状態を受け取ってリダイレクトで返します。
//!
//! 以下の層に分かれています：
//!
//! - **Domain Layer**: デバイス状態、ファイルシステム、プラットフォームのモデルとトレイト
//! - **Application Layer**: 起動シーケンスとシステム情報の収集
//! - **Infrastructure Layer**: Linux 上の実装とテスト用の実装
//! - **Interface Layer**: HTTP ルーティングとハンドラ

pub mod application;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use domain::*;

use std::path::PathBuf;
use std::time::Duration;

/// Default hostname announced on the network.
pub const DEFAULT_HOSTNAME: &str = "webserver";

/// POSIX TZ string handed to the clock collaborator.
pub const DEFAULT_TIMEZONE: &str = "CET-1CEST,M3.5.0,M10.5.0/3";

pub const DEFAULT_NTP_SERVER: &str = "pool.ntp.org";

/// HTTP サーバーの設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory acting as the device's flash filesystem.
    pub root: PathBuf,
    pub button_mode: ButtonMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
            root: PathBuf::from("/var/lib/button-webserver/data"),
            button_mode: ButtonMode::default(),
        }
    }
}

/// ネットワーク立ち上げの設定
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// When false the association, hostname and clock steps are skipped.
    pub enabled: bool,
    pub interface: String,
    pub credentials: WifiCredentials,
    pub hostname: String,
    pub timezone: String,
    pub ntp_server: String,
    pub poll_interval: Duration,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interface: "wlan0".to_string(),
            credentials: WifiCredentials::default(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            ntp_server: DEFAULT_NTP_SERVER.to_string(),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// アプリケーション全体の設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub network: NetworkConfig,
    /// Wait before asking the supervisor for a restart after a fatal startup error.
    pub restart_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            network: NetworkConfig::default(),
            restart_delay: Duration::from_secs(2),
        }
    }
}
