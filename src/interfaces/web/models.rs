use crate::domain::storage::FileEntry;
use crate::domain::system::SysInfo;
use serde::{Deserialize, Serialize};

/// One element of the `/$list` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntryDto {
    pub name: String,
    pub size: u64,
    pub time: i64,
}

impl From<FileEntry> for FileEntryDto {
    fn from(entry: FileEntry) -> Self {
        Self {
            name: entry.name,
            size: entry.size_bytes,
            time: entry.mod_time,
        }
    }
}

/// Body of `/$sysinfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysInfoDto {
    pub flash_size: u64,
    pub free_heap: u64,
    pub fs_total_bytes: u64,
    pub fs_used_bytes: u64,
}

impl From<SysInfo> for SysInfoDto {
    fn from(info: SysInfo) -> Self {
        Self {
            flash_size: info.flash_size_bytes,
            free_heap: info.free_heap_bytes,
            fs_total_bytes: info.fs_total_bytes,
            fs_used_bytes: info.fs_used_bytes,
        }
    }
}
