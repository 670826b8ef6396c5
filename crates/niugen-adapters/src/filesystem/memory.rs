//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use niugen_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Pre-seed a file, creating parents (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.into());
    }

    /// List all files, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> niugen_core::error::NiugenResult<()> {
        let mut inner = self.inner.write().expect("memory filesystem poisoned");

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> niugen_core::error::NiugenResult<()> {
        let mut inner = self.inner.write().expect("memory filesystem poisoned");

        // Same contract as the real filesystem: the parent must exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(niugen_core::application::ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_ok());
        assert_eq!(fs.read_file("a/b.txt").as_deref(), Some("x"));
    }

    #[test]
    fn exists_sees_files_and_directories() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("pkg/src")).unwrap();
        assert!(fs.exists(Path::new("pkg")));
        assert!(fs.exists(Path::new("pkg/src")));
        assert!(!fs.exists(Path::new("pkg/src/index.ts")));
    }

    #[test]
    fn seed_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("x/y/z.txt", "seeded");
        assert!(fs.exists(Path::new("x/y")));
        assert_eq!(fs.read_file("x/y/z.txt").as_deref(), Some("seeded"));
    }
}
