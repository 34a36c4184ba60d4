use crate::domain::storage::{FileEntry, Filesystem, FilesystemError, FsInfo, FsPath};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use tracing::info;

#[derive(Debug, Clone)]
struct MemoryFile {
    contents: Vec<u8>,
    mod_time: i64,
}

/// In-memory filesystem for tests and for running without a data directory.
pub struct MemoryFilesystem {
    files: RwLock<BTreeMap<String, MemoryFile>>,
    capacity_bytes: u64,
    mountable: bool,
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystem {
    /// Capacity of a typical 1 MiB flash partition.
    pub const DEFAULT_CAPACITY: u64 = 1024 * 1024;

    pub fn new() -> Self {
        Self {
            files: RwLock::new(BTreeMap::new()),
            capacity_bytes: Self::DEFAULT_CAPACITY,
            mountable: true,
        }
    }

    pub fn with_capacity(mut self, capacity_bytes: u64) -> Self {
        self.capacity_bytes = capacity_bytes;
        self
    }

    /// A filesystem whose `mount` always fails.
    pub fn unmountable() -> Self {
        Self {
            mountable: false,
            ..Self::new()
        }
    }

    pub fn with_file(self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents, 0);
        self
    }

    pub fn insert(&self, path: &str, contents: impl Into<Vec<u8>>, mod_time: i64) {
        let key = FsPath::parse(path)
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|_| path.trim_start_matches('/').to_string());
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                key,
                MemoryFile {
                    contents: contents.into(),
                    mod_time,
                },
            );
    }
}

impl Filesystem for MemoryFilesystem {
    fn mount(&self) -> Result<(), FilesystemError> {
        if !self.mountable {
            return Err(FilesystemError::MountFailed(
                "in-memory filesystem configured to fail".to_string(),
            ));
        }
        info!("In-memory filesystem mounted");
        Ok(())
    }

    fn exists(&self, path: &FsPath) -> Result<bool, FilesystemError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        Ok(files.contains_key(path.as_str()))
    }

    fn list(&self) -> Result<Vec<FileEntry>, FilesystemError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        Ok(files
            .iter()
            .filter(|(name, _)| !name.contains('/'))
            .map(|(name, file)| FileEntry {
                name: name.clone(),
                size_bytes: file.contents.len() as u64,
                mod_time: file.mod_time,
            })
            .collect())
    }

    fn info(&self) -> Result<FsInfo, FilesystemError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        let used: u64 = files.values().map(|f| f.contents.len() as u64).sum();
        Ok(FsInfo {
            total_bytes: self.capacity_bytes,
            used_bytes: used.min(self.capacity_bytes),
        })
    }

    fn read(&self, path: &FsPath) -> Result<Option<Vec<u8>>, FilesystemError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        Ok(files.get(path.as_str()).map(|f| f.contents.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filesystem() {
        let filesystem = MemoryFilesystem::new();
        assert!(filesystem.mount().is_ok());
        assert!(filesystem.list().unwrap().is_empty());
        assert_eq!(filesystem.info().unwrap().used_bytes, 0);
    }

    #[test]
    fn test_files_are_keyed_by_normalized_path() {
        let filesystem = MemoryFilesystem::new()
            .with_file("/index.htm", "hello")
            .with_file("css/site.css", "body{}");

        assert!(filesystem.exists(&FsPath::parse("index.htm").unwrap()).unwrap());
        assert_eq!(
            filesystem.read(&FsPath::parse("/css//site.css").unwrap()).unwrap(),
            Some(b"body{}".to_vec())
        );

        // nested files are not part of the root listing
        let names: Vec<_> = filesystem.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["index.htm".to_string()]);
        assert_eq!(filesystem.info().unwrap().used_bytes, 11);
    }

    #[test]
    fn test_unmountable() {
        assert!(MemoryFilesystem::unmountable().mount().is_err());
    }
}
