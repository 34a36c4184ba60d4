use crate::domain::system::{Platform, PlatformError};

/// Platform with fixed figures, for tests and development hosts.
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform {
    pub flash_size_bytes: u64,
    pub free_heap_bytes: u64,
}

impl Default for FixedPlatform {
    fn default() -> Self {
        Self::new(4 * 1024 * 1024, 40 * 1024)
    }
}

impl FixedPlatform {
    pub fn new(flash_size_bytes: u64, free_heap_bytes: u64) -> Self {
        Self {
            flash_size_bytes,
            free_heap_bytes,
        }
    }
}

impl Platform for FixedPlatform {
    fn flash_size_bytes(&self) -> Result<u64, PlatformError> {
        Ok(self.flash_size_bytes)
    }

    fn free_heap_bytes(&self) -> Result<u64, PlatformError> {
        Ok(self.free_heap_bytes)
    }
}
