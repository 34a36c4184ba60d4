use crate::domain::storage::Filesystem;
use crate::domain::system::{Platform, SysInfo};
use std::sync::Arc;
use tracing::warn;

/// システム情報を収集・表示するユースケース
pub struct ShowSystemInfoUseCase {
    filesystem: Arc<dyn Filesystem>,
    platform: Arc<dyn Platform>,
}

impl ShowSystemInfoUseCase {
    pub fn new(filesystem: Arc<dyn Filesystem>, platform: Arc<dyn Platform>) -> Self {
        Self {
            filesystem,
            platform,
        }
    }

    /// Reads every figure fresh. A failing read is logged and reported as 0.
    pub fn collect(&self) -> SysInfo {
        let flash_size_bytes = self.platform.flash_size_bytes().unwrap_or_else(|e| {
            warn!("Failed to read flash size: {}", e);
            0
        });
        let free_heap_bytes = self.platform.free_heap_bytes().unwrap_or_else(|e| {
            warn!("Failed to read free heap: {}", e);
            0
        });
        let fs_info = self.filesystem.info().unwrap_or_else(|e| {
            warn!("Failed to read filesystem info: {}", e);
            Default::default()
        });

        SysInfo {
            flash_size_bytes,
            free_heap_bytes,
            fs_total_bytes: fs_info.total_bytes,
            fs_used_bytes: fs_info.used_bytes,
        }
    }

    /// CLI の `info` サブコマンドの出力
    pub fn execute(&self, verbose: bool) {
        let info = self.collect();

        println!("🔍 System Information");
        println!("====================");
        println!("   Build: {}", env!("BUILD_TIMESTAMP"));
        println!("   Flash size: {} bytes", info.flash_size_bytes);
        println!("   Free memory: {} bytes", info.free_heap_bytes);
        println!(
            "   Filesystem: {} of {} bytes used",
            info.fs_used_bytes, info.fs_total_bytes
        );

        if verbose {
            println!("\n📁 Files:");
            match self.filesystem.list() {
                Ok(entries) if entries.is_empty() => println!("   (empty)"),
                Ok(entries) => {
                    for entry in entries {
                        println!(
                            "   - {} ({} bytes, modified {})",
                            entry.name, entry.size_bytes, entry.mod_time
                        );
                    }
                }
                Err(e) => println!("   ❌ Failed to list files: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::system::PlatformError;
    use crate::infrastructure::storage::MemoryFilesystem;
    use crate::infrastructure::system::FixedPlatform;

    struct BrokenPlatform;

    impl Platform for BrokenPlatform {
        fn flash_size_bytes(&self) -> Result<u64, PlatformError> {
            Err(PlatformError::ReadFailed {
                source_path: "/sys/block/x/size".to_string(),
                message: "gone".to_string(),
            })
        }

        fn free_heap_bytes(&self) -> Result<u64, PlatformError> {
            Ok(1234)
        }
    }

    #[test]
    fn test_collect_combines_platform_and_filesystem() {
        let filesystem = Arc::new(
            MemoryFilesystem::new()
                .with_capacity(4096)
                .with_file("/index.htm", vec![0u8; 100]),
        );
        let platform = Arc::new(FixedPlatform::new(1 << 22, 30_000));

        let info = ShowSystemInfoUseCase::new(filesystem, platform).collect();
        assert_eq!(
            info,
            SysInfo {
                flash_size_bytes: 1 << 22,
                free_heap_bytes: 30_000,
                fs_total_bytes: 4096,
                fs_used_bytes: 100,
            }
        );
    }

    #[test]
    fn test_failed_reads_become_zero() {
        let info = ShowSystemInfoUseCase::new(
            Arc::new(MemoryFilesystem::new()),
            Arc::new(BrokenPlatform),
        )
        .collect();

        assert_eq!(info.flash_size_bytes, 0);
        assert_eq!(info.free_heap_bytes, 1234);
    }
}
