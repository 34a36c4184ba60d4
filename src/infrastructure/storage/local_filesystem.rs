use crate::domain::storage::{FileEntry, Filesystem, FilesystemError, FsInfo, FsPath};
use nix::sys::statvfs::statvfs;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;
use tracing::{debug, info};

/// Device filesystem backed by a directory on the board's storage.
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &FsPath) -> PathBuf {
        if path.is_root() {
            self.root.clone()
        } else {
            self.root.join(path.as_str())
        }
    }
}

impl Filesystem for LocalFilesystem {
    fn mount(&self) -> Result<(), FilesystemError> {
        let metadata = fs::metadata(&self.root).map_err(|e| {
            FilesystemError::MountFailed(format!("{}: {}", self.root.display(), e))
        })?;

        if !metadata.is_dir() {
            return Err(FilesystemError::MountFailed(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        info!("Filesystem mounted at {}", self.root.display());
        Ok(())
    }

    fn exists(&self, path: &FsPath) -> Result<bool, FilesystemError> {
        match fs::metadata(self.resolve(path)) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> Result<Vec<FileEntry>, FilesystemError> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                debug!("Skipping non-file entry {:?}", entry.file_name());
                continue;
            }

            let mod_time = metadata
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0);

            entries.push(FileEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                size_bytes: metadata.len(),
                mod_time,
            });
        }

        Ok(entries)
    }

    fn info(&self) -> Result<FsInfo, FilesystemError> {
        let stats = statvfs(self.root.as_path()).map_err(std::io::Error::from)?;
        let fragment = stats.fragment_size() as u64;
        let blocks = stats.blocks() as u64;
        let free = stats.blocks_free() as u64;

        Ok(FsInfo {
            total_bytes: blocks * fragment,
            used_bytes: blocks.saturating_sub(free) * fragment,
        })
    }

    fn read(&self, path: &FsPath) -> Result<Option<Vec<u8>>, FilesystemError> {
        if path.is_root() {
            return Ok(None);
        }

        let full_path = self.resolve(path);
        match fs::metadata(&full_path) {
            Ok(metadata) if metadata.is_file() => Ok(Some(fs::read(&full_path)?)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempRoot(PathBuf);

    impl TempRoot {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!(
                "button-webserver-test-{}-{}",
                std::process::id(),
                COUNTER.fetch_add(1, Ordering::SeqCst)
            ));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }
    }

    impl Drop for TempRoot {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_mount_requires_existing_directory() {
        let root = TempRoot::new();
        assert!(LocalFilesystem::new(&root.0).mount().is_ok());

        let missing = LocalFilesystem::new(root.0.join("missing"));
        assert!(matches!(
            missing.mount(),
            Err(FilesystemError::MountFailed(_))
        ));
    }

    #[test]
    fn test_list_reports_only_files() {
        let root = TempRoot::new();
        fs::write(root.0.join("index.htm"), b"<html></html>").unwrap();
        fs::write(root.0.join("data.json"), b"{}").unwrap();
        fs::create_dir(root.0.join("sub")).unwrap();

        let filesystem = LocalFilesystem::new(&root.0);
        let mut entries = filesystem.list().unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "data.json");
        assert_eq!(entries[0].size_bytes, 2);
        assert_eq!(entries[1].name, "index.htm");
        assert_eq!(entries[1].size_bytes, 13);
        assert!(entries[1].mod_time > 0);
    }

    #[test]
    fn test_exists_and_read() {
        let root = TempRoot::new();
        fs::write(root.0.join("index.htm"), b"hello").unwrap();
        fs::create_dir(root.0.join("sub")).unwrap();
        let filesystem = LocalFilesystem::new(&root.0);

        let index = FsPath::parse("/index.htm").unwrap();
        let sub = FsPath::parse("/sub").unwrap();
        let missing = FsPath::parse("/missing.txt").unwrap();

        assert!(filesystem.exists(&index).unwrap());
        assert!(!filesystem.exists(&sub).unwrap());
        assert!(!filesystem.exists(&missing).unwrap());

        assert_eq!(filesystem.read(&index).unwrap(), Some(b"hello".to_vec()));
        assert_eq!(filesystem.read(&sub).unwrap(), None);
        assert_eq!(filesystem.read(&missing).unwrap(), None);
    }

    #[test]
    fn test_info_reports_consistent_space() {
        let root = TempRoot::new();
        let info = LocalFilesystem::new(&root.0).info().unwrap();
        assert!(info.total_bytes > 0);
        assert!(info.used_bytes <= info.total_bytes);
    }
}
