use crate::domain::system::{Platform, PlatformError};
use std::fs;
use tracing::debug;

const MEMINFO_PATH: &str = "/proc/meminfo";
const SECTOR_SIZE: u64 = 512;

/// Reads hardware figures from procfs and sysfs.
pub struct LinuxPlatform {
    flash_device: String,
}

impl Default for LinuxPlatform {
    fn default() -> Self {
        Self::new("mmcblk0")
    }
}

impl LinuxPlatform {
    /// `flash_device` is the block device name under `/sys/block`, e.g. `mmcblk0`.
    pub fn new(flash_device: impl Into<String>) -> Self {
        Self {
            flash_device: flash_device.into(),
        }
    }

    fn read(path: &str) -> Result<String, PlatformError> {
        fs::read_to_string(path).map_err(|e| PlatformError::ReadFailed {
            source_path: path.to_string(),
            message: e.to_string(),
        })
    }
}

impl Platform for LinuxPlatform {
    fn flash_size_bytes(&self) -> Result<u64, PlatformError> {
        let path = format!("/sys/block/{}/size", self.flash_device);
        let contents = Self::read(&path)?;
        let sectors = contents
            .trim()
            .parse::<u64>()
            .map_err(|e| PlatformError::ParseFailed {
                source_path: path.clone(),
                message: e.to_string(),
            })?;
        debug!("{} reports {} sectors", path, sectors);
        Ok(sectors * SECTOR_SIZE)
    }

    fn free_heap_bytes(&self) -> Result<u64, PlatformError> {
        let contents = Self::read(MEMINFO_PATH)?;
        parse_mem_available(&contents).ok_or_else(|| PlatformError::ParseFailed {
            source_path: MEMINFO_PATH.to_string(),
            message: "MemAvailable not found".to_string(),
        })
    }
}

/// `MemAvailable` from `/proc/meminfo`, in bytes.
fn parse_mem_available(meminfo: &str) -> Option<u64> {
    meminfo
        .lines()
        .find(|line| line.starts_with("MemAvailable:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse::<u64>().ok())
        .map(|kb| kb * 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mem_available() {
        let meminfo = "MemTotal:        1893312 kB\n\
                       MemFree:          120000 kB\n\
                       MemAvailable:    1500000 kB\n\
                       Buffers:           33000 kB\n";
        assert_eq!(parse_mem_available(meminfo), Some(1_500_000 * 1024));
        assert_eq!(parse_mem_available("MemTotal: 1 kB\n"), None);
    }

    #[test]
    fn test_missing_block_device_is_an_error() {
        let platform = LinuxPlatform::new("no-such-device");
        assert!(matches!(
            platform.flash_size_bytes(),
            Err(PlatformError::ReadFailed { .. })
        ));
    }
}
