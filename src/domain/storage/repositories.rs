use super::{FileEntry, FilesystemError, FsInfo, FsPath};

/// Narrow view of the device's flash filesystem used by the web layer.
pub trait Filesystem: Send + Sync {
    /// Makes the filesystem available. Called once during startup.
    fn mount(&self) -> Result<(), FilesystemError>;

    /// True when `path` names a regular file.
    fn exists(&self, path: &FsPath) -> Result<bool, FilesystemError>;

    /// Regular files directly under the root, in whatever order the backend yields them.
    fn list(&self) -> Result<Vec<FileEntry>, FilesystemError>;

    fn info(&self) -> Result<FsInfo, FilesystemError>;

    /// Contents of the file at `path`, or `None` when there is no such file.
    fn read(&self, path: &FsPath) -> Result<Option<Vec<u8>>, FilesystemError>;
}
