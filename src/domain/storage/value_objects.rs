use super::errors::FilesystemError;
use std::fmt;

/// A path inside the device filesystem, relative to its root.
///
/// Built from a request path like `/css/site.css`; empty and `.` segments are
/// dropped and `..` is rejected so a path can never leave the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FsPath(String);

impl FsPath {
    pub fn parse(path: &str) -> Result<Self, FilesystemError> {
        let mut segments = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(FilesystemError::InvalidPath(path.to_string())),
                s if s.contains('\\') || s.contains('\0') => {
                    return Err(FilesystemError::InvalidPath(path.to_string()));
                }
                s => segments.push(s),
            }
        }
        Ok(Self(segments.join("/")))
    }

    /// Path relative to the root, without a leading slash. Empty for the root itself.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_segments() {
        assert_eq!(FsPath::parse("/index.htm").unwrap().as_str(), "index.htm");
        assert_eq!(FsPath::parse("//css/./site.css").unwrap().as_str(), "css/site.css");
        assert_eq!(FsPath::parse("/$update.htm").unwrap().to_string(), "/$update.htm");
        assert!(FsPath::parse("/").unwrap().is_root());
    }

    #[test]
    fn test_parse_rejects_escapes() {
        assert!(FsPath::parse("/../etc/passwd").is_err());
        assert!(FsPath::parse("/a/../../b").is_err());
        assert!(FsPath::parse("/a\\b").is_err());
    }
}
