//! デバッグとログ機能
//!
//! プロジェクト全体のログ初期化を提供

use std::fs;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// デバッグ設定
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// ログレベル
    pub log_level: Level,
    /// ファイルログを有効にするか
    pub enable_file_logging: bool,
    /// ログファイルのディレクトリ
    pub log_directory: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: false,
            log_directory: "logs".to_string(),
        }
    }
}

impl DebugConfig {
    /// 開発環境用の設定
    pub fn development() -> Self {
        Self {
            log_level: Level::DEBUG,
            ..Self::default()
        }
    }

    /// 本番環境用の設定
    pub fn production() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: true,
            log_directory: "/var/log/button-webserver".to_string(),
        }
    }

    /// テスト環境用の設定
    pub fn test() -> Self {
        Self {
            log_level: Level::WARN,
            enable_file_logging: false,
            log_directory: "test_logs".to_string(),
        }
    }

    fn default_directive(&self) -> String {
        format!(
            "button_webserver={level},tower_http={level}",
            level = self.log_level
        )
    }
}

/// ログシステムを初期化
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(
    config: &DebugConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.default_directive())?,
    };

    if config.enable_file_logging {
        fs::create_dir_all(&config.log_directory)?;
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            &config.log_directory,
            "button-webserver.log",
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender)
            .json()
            .try_init()?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .pretty()
            .with_target(true)
            .try_init()?;
    }

    info!("ログシステムが初期化されました");
    debug!("デバッグ設定: {:?}", config);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(!DebugConfig::default().enable_file_logging);
        assert_eq!(DebugConfig::development().log_level, Level::DEBUG);
        assert!(DebugConfig::production().enable_file_logging);
        assert_eq!(
            DebugConfig::test().default_directive(),
            "button_webserver=WARN,tower_http=WARN"
        );
    }

    #[test]
    fn test_unusable_log_directory_is_reported() {
        let blocker = std::env::temp_dir().join(format!(
            "button-webserver-log-blocker-{}",
            std::process::id()
        ));
        fs::write(&blocker, b"not a directory").unwrap();

        let config = DebugConfig {
            enable_file_logging: true,
            log_directory: blocker.join("logs").to_string_lossy().into_owned(),
            ..DebugConfig::test()
        };
        let result = init_logging(&config);
        fs::remove_file(&blocker).unwrap();

        // エラーはスレッド間で受け渡せる
        let error = std::thread::spawn(move || result.unwrap_err().to_string())
            .join()
            .unwrap();
        assert!(!error.is_empty());
    }
}
