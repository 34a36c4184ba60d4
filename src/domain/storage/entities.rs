use serde::{Deserialize, Serialize};

/// One entry of a directory listing. Regenerated on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size_bytes: u64,
    /// Modification time in Unix seconds, 0 when the filesystem does not know it.
    pub mod_time: i64,
}

/// Space accounting of the mounted filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsInfo {
    pub total_bytes: u64,
    pub used_bytes: u64,
}
