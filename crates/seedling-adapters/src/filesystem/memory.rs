//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use seedling_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SeedlingResult,
};

/// In-memory filesystem for testing.
///
/// Writing a file implicitly registers its ancestor directories, so test
/// fixtures can be seeded with `write_file` alone.
#[derive(Debug, Clone)]
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
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> SeedlingResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| poisoned(path))?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> SeedlingResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> SeedlingResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

fn poisoned(path: &Path) -> seedling_core::error::SeedlingError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_registers_ancestor_directories() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("/work/app/src/main.js"), "x").unwrap();

        assert!(fs.exists(Path::new("/work/app")));
        assert!(fs.exists(Path::new("/work/app/src/main.js")));
        assert!(!fs.exists(Path::new("/work/other")));
    }

    #[test]
    fn remove_dir_all_is_recursive() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("/work/app/a.txt"), "a").unwrap();
        fs.write_file(Path::new("/work/app/sub/b.txt"), "b").unwrap();
        fs.write_file(Path::new("/work/keep.txt"), "k").unwrap();

        fs.remove_dir_all(Path::new("/work/app")).unwrap();

        assert!(!fs.exists(Path::new("/work/app")));
        assert!(!fs.exists(Path::new("/work/app/sub/b.txt")));
        assert!(fs.exists(Path::new("/work/keep.txt")));
    }

    #[test]
    fn read_of_missing_file_is_an_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.read_to_string(Path::new("/missing")).is_err());
    }
}
